//! Built-in word tables for the lexicon engine.

/// Mean valence per token, on the [-4, 4] scale used by rated lexicons.
///
/// Keys are lowercase. Emoticons are matched verbatim.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("accept", 1.6),
    ("accepted", 1.1),
    ("accomplish", 1.8),
    ("accomplished", 1.9),
    ("admire", 2.1),
    ("admired", 2.3),
    ("adorable", 2.2),
    ("adore", 2.6),
    ("agree", 1.5),
    ("amazed", 2.2),
    ("amazing", 2.8),
    ("amused", 1.6),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("approve", 1.7),
    ("attractive", 1.9),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("blessed", 2.9),
    ("brave", 2.4),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("charming", 2.8),
    ("cheer", 2.3),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("clever", 2.0),
    ("comfort", 1.5),
    ("comfortable", 2.3),
    ("confident", 2.2),
    ("cool", 1.3),
    ("cute", 2.0),
    ("delight", 2.9),
    ("delighted", 2.3),
    ("delightful", 2.9),
    ("eager", 1.5),
    ("easy", 1.9),
    ("effective", 2.1),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enjoying", 2.4),
    ("enthusiastic", 1.9),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("free", 2.3),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("funny", 1.9),
    ("generous", 2.3),
    ("glad", 2.0),
    ("glorious", 3.2),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happiness", 2.6),
    ("happy", 2.7),
    ("harmony", 1.7),
    ("help", 1.7),
    ("helpful", 1.8),
    ("honest", 2.3),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("ideal", 2.4),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("inspiring", 2.2),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("like", 2.0),
    ("liked", 1.8),
    ("lol", 2.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("luck", 2.0),
    ("lucky", 1.8),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("please", 1.3),
    ("pleased", 1.9),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("recommended", 1.9),
    ("relaxed", 2.2),
    ("relief", 2.1),
    ("reliable", 1.9),
    ("respect", 2.1),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("smart", 1.7),
    ("smile", 1.5),
    ("solid", 1.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("super", 2.9),
    ("support", 1.7),
    ("supportive", 1.8),
    ("sweet", 2.0),
    ("terrific", 3.2),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("thankful", 2.7),
    ("trust", 2.3),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("warm", 0.9),
    ("welcome", 2.0),
    ("win", 2.8),
    ("winner", 2.8),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yay", 2.4),
    ("yes", 1.7),
    // Negative
    ("abandon", -1.9),
    ("abandoned", -2.0),
    ("abuse", -3.2),
    ("abused", -2.3),
    ("afraid", -2.2),
    ("aggressive", -0.6),
    ("agony", -1.8),
    ("alarm", -1.4),
    ("alone", -1.0),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("arrogant", -1.8),
    ("ashamed", -2.1),
    ("attack", -2.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("bitter", -1.8),
    ("blame", -1.4),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broken", -2.1),
    ("bug", -1.0),
    ("buggy", -1.8),
    ("crap", -1.6),
    ("crash", -1.7),
    ("crazy", -1.4),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("damage", -2.2),
    ("damn", -1.7),
    ("dead", -3.3),
    ("death", -2.9),
    ("depressed", -2.3),
    ("depressing", -1.6),
    ("desperate", -1.3),
    ("destroy", -2.5),
    ("died", -2.6),
    ("difficult", -1.5),
    ("disappoint", -2.3),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dumb", -2.3),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fear", -2.2),
    ("fool", -1.9),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("greed", -1.7),
    ("grief", -2.2),
    ("guilty", -1.8),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("hell", -3.6),
    ("hopeless", -2.0),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("idiot", -2.3),
    ("ignore", -1.5),
    ("ignored", -1.6),
    ("ill", -1.8),
    ("insult", -2.3),
    ("irritating", -2.0),
    ("kill", -3.7),
    ("lame", -1.8),
    ("lazy", -1.5),
    ("liar", -2.9),
    ("lonely", -1.5),
    ("lose", -1.7),
    ("lost", -1.3),
    ("mad", -2.2),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("miss", -0.6),
    ("mistake", -1.4),
    ("nasty", -2.6),
    ("no", -1.2),
    ("pain", -2.3),
    ("painful", -1.9),
    ("panic", -2.3),
    ("pathetic", -2.7),
    ("poor", -2.1),
    ("problem", -1.7),
    ("rage", -2.6),
    ("regret", -1.9),
    ("rude", -2.0),
    ("ruin", -2.8),
    ("ruined", -2.6),
    ("sad", -2.1),
    ("scared", -1.9),
    ("shame", -2.1),
    ("shit", -2.6),
    ("sick", -2.3),
    ("slow", -0.7),
    ("sorry", -0.3),
    ("stress", -1.8),
    ("stupid", -2.4),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("threat", -2.4),
    ("tired", -1.9),
    ("trouble", -1.7),
    ("ugly", -2.3),
    ("unfair", -2.1),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useless", -1.8),
    ("violent", -2.9),
    ("waste", -1.8),
    ("weak", -1.9),
    ("weird", -0.7),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("wrong", -2.1),
    // Emoticons
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.3),
    (";)", 0.9),
    ("<3", 1.9),
    (":(", -1.9),
    (":-(", -1.5),
    (":'(", -2.2),
];

/// Degree adverbs that scale the next sentiment word.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("kindof", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
    ("sortof", B_DECR),
];

/// Tokens that flip the polarity of a nearby sentiment word.
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

/// Increment added by an intensifying booster.
pub(crate) const B_INCR: f64 = 0.293;
/// Increment added by a dampening booster.
pub(crate) const B_DECR: f64 = -0.293;
/// Emphasis added to an ALL-CAPS sentiment word in mixed-case text.
pub(crate) const C_INCR: f64 = 0.733;
/// Multiplier applied to a negated sentiment word.
pub(crate) const N_SCALAR: f64 = -0.74;
