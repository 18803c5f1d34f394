/// `(word, polarity, subjectivity)`; polarity in `[-1, 1]`, subjectivity in `[0, 1]`.
pub(crate) const ADJECTIVES: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("calm", 0.3, 0.75),
    ("cheap", 0.4, 0.7),
    ("clean", 0.367, 0.683),
    ("clever", 0.5, 1.0),
    ("comfortable", 0.4, 0.7),
    ("cool", 0.35, 0.65),
    ("correct", 0.0, 0.0),
    ("cute", 0.5, 1.0),
    ("delicious", 1.0, 1.0),
    ("delightful", 1.0, 1.0),
    ("easy", 0.433, 0.833),
    ("effective", 0.6, 0.8),
    ("enjoyable", 0.5, 0.5),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("fine", 0.417, 0.5),
    ("free", 0.4, 0.8),
    ("fresh", 0.3, 0.5),
    ("friendly", 0.375, 0.5),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.0, 0.0),
    ("honest", 0.6, 0.9),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("kind", 0.6, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("lucky", 0.333, 1.0),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.733, 0.967),
    ("pleased", 0.5, 1.0),
    ("positive", 0.227, 0.545),
    ("pretty", 0.25, 1.0),
    ("proud", 0.8, 1.0),
    ("quick", 0.333, 0.5),
    ("reliable", 0.4, 0.6),
    ("right", 0.286, 0.536),
    ("safe", 0.5, 0.5),
    ("smart", 0.214, 0.643),
    ("smooth", 0.4, 0.7),
    ("solid", 0.1, 0.4),
    ("strong", 0.433, 0.733),
    ("superb", 1.0, 1.0),
    ("sweet", 0.35, 0.65),
    ("terrific", 1.0, 1.0),
    ("useful", 0.3, 0.0),
    ("warm", 0.6, 0.6),
    ("welcome", 0.8, 0.9),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.1),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.667),
    ("bitter", -0.1, 0.0),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("buggy", -0.5, 0.7),
    ("confusing", -0.3, 0.7),
    ("crazy", -0.6, 0.9),
    ("dangerous", -0.6, 0.9),
    ("dead", -0.2, 0.4),
    ("difficult", -0.5, 1.0),
    ("dirty", -0.6, 0.8),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dull", -0.312, 0.688),
    ("dumb", -0.375, 0.5),
    ("expensive", -0.5, 0.7),
    ("fake", -0.5, 1.0),
    ("hard", -0.292, 0.542),
    ("horrible", -1.0, 1.0),
    ("lame", -0.5, 1.0),
    ("lazy", -0.25, 1.0),
    ("mad", -0.625, 1.0),
    ("mediocre", -0.5, 0.8),
    ("miserable", -1.0, 1.0),
    ("nasty", -1.0, 1.0),
    ("painful", -0.7, 0.9),
    ("pathetic", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("rude", -0.3, 0.6),
    ("sad", -0.5, 1.0),
    ("sick", -0.714, 0.857),
    ("slow", -0.3, 0.4),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unhappy", -0.6, 0.9),
    ("upset", -0.5, 0.8),
    ("useless", -0.5, 0.0),
    ("weak", -0.375, 0.625),
    ("weird", -0.5, 1.0),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Adverbs that scale the polarity and subjectivity of the next adjective.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("completely", 1.5),
    ("especially", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("particularly", 1.3),
    ("quite", 1.1),
    ("rather", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.3),
    ("totally", 1.5),
    ("truly", 1.3),
    ("very", 1.3),
    ("barely", 0.5),
    ("fairly", 0.8),
    ("hardly", 0.5),
    ("kinda", 0.6),
    ("little", 0.6),
    ("slightly", 0.5),
    ("somewhat", 0.6),
];

pub(crate) const NEGATIONS: &[&str] = &["not", "never", "no", "nothing", "without"];

/// Factor applied to the polarity of a negated assessment.
pub(crate) const NEGATION_FACTOR: f64 = -0.5;
/// Factor applied to an assessment's polarity by a trailing `!`.
pub(crate) const EXCLAMATION_FACTOR: f64 = 1.25;
