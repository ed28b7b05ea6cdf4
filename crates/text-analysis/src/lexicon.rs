//! Word lists for the rule-based sentiment model.
//!
//! Valences are on the usual -4..=4 scale: mean human ratings of how
//! positive or negative a word reads on its own.

/// Word -> valence
pub(crate) const VALENCE: &[(&str, f64)] = &[
    // positive
    ("admire", 2.1),
    ("admired", 2.3),
    ("adorable", 2.2),
    ("amazing", 2.8),
    ("amused", 1.6),
    ("amusing", 2.0),
    ("appealing", 2.0),
    ("applause", 1.8),
    ("astonishing", 2.2),
    ("attractive", 1.9),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("beautifully", 2.7),
    ("beauty", 2.8),
    ("best", 3.2),
    ("better", 1.9),
    ("bliss", 2.7),
    ("bold", 1.6),
    ("breathtaking", 2.8),
    ("brilliance", 2.9),
    ("brilliant", 2.8),
    ("brilliantly", 3.0),
    ("calm", 1.3),
    ("captivating", 2.4),
    ("charm", 1.7),
    ("charming", 2.8),
    ("cheer", 2.3),
    ("classic", 1.8),
    ("clever", 2.0),
    ("compelling", 2.2),
    ("cool", 1.3),
    ("courage", 2.2),
    ("creative", 1.9),
    ("delight", 2.9),
    ("delightful", 2.8),
    ("engaging", 1.8),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("entertaining", 2.4),
    ("epic", 2.0),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("extraordinary", 2.6),
    ("fabulous", 2.4),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("fine", 0.8),
    ("fun", 2.3),
    ("funny", 1.9),
    ("genius", 2.6),
    ("glad", 2.0),
    ("glorious", 2.6),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("great", 3.1),
    ("greatest", 3.2),
    ("happy", 2.7),
    ("heartwarming", 2.3),
    ("hilarious", 1.7),
    ("hope", 1.9),
    ("impressive", 2.3),
    ("incredible", 2.6),
    ("inspiring", 2.6),
    ("inspired", 2.2),
    ("intelligent", 2.0),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("like", 2.0),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("magnificent", 2.9),
    ("marvelous", 2.9),
    ("masterful", 2.9),
    ("masterpiece", 3.1),
    ("memorable", 2.1),
    ("moving", 1.6),
    ("nice", 1.8),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("perfection", 2.7),
    ("perfectly", 3.2),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("powerful", 1.8),
    ("praise", 2.6),
    ("recommend", 1.5),
    ("recommended", 1.8),
    ("remarkable", 2.4),
    ("rich", 1.9),
    ("satisfying", 2.0),
    ("smart", 1.7),
    ("spectacular", 2.6),
    ("strong", 2.3),
    ("stunning", 2.7),
    ("success", 2.7),
    ("superb", 3.1),
    ("sweet", 2.0),
    ("talent", 1.8),
    ("talented", 2.3),
    ("terrific", 2.6),
    ("thrilling", 2.1),
    ("touching", 1.8),
    ("triumph", 2.6),
    ("true", 1.8),
    ("understated", 0.4),
    ("unforgettable", 2.4),
    ("win", 2.8),
    ("winner", 2.8),
    ("wonderful", 2.7),
    ("wonderfully", 2.9),
    ("worth", 0.9),
    ("wow", 2.8),
    // negative
    ("abandoned", -1.9),
    ("absurd", -1.1),
    ("abuse", -3.2),
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("atrocious", -2.8),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("badly", -2.1),
    ("bland", -1.2),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broken", -2.0),
    ("cheap", -0.7),
    ("cheesy", -0.9),
    ("clumsy", -1.4),
    ("confused", -1.3),
    ("confusing", -0.9),
    ("crap", -1.6),
    ("crappy", -2.5),
    ("crime", -2.5),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("dark", -0.9),
    ("dead", -3.3),
    ("death", -2.9),
    ("die", -2.9),
    ("disappoint", -1.7),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dreadful", -2.3),
    ("dull", -1.7),
    ("dumb", -2.3),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fails", -1.8),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fear", -2.2),
    ("flawed", -1.7),
    ("forgettable", -1.2),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("horrific", -3.4),
    ("hurt", -2.4),
    ("idiotic", -2.6),
    ("kill", -3.7),
    ("killed", -3.5),
    ("killer", -3.3),
    ("lame", -1.8),
    ("lazy", -1.5),
    ("lifeless", -2.0),
    ("lost", -1.3),
    ("mediocre", -1.0),
    ("mess", -1.5),
    ("messy", -1.5),
    ("miserable", -2.2),
    ("murder", -3.7),
    ("nonsense", -1.7),
    ("overrated", -1.6),
    ("pain", -2.3),
    ("painful", -1.9),
    ("pathetic", -2.7),
    ("pointless", -1.7),
    ("poor", -2.1),
    ("poorly", -1.7),
    ("predictable", -0.9),
    ("problem", -1.7),
    ("ridiculous", -1.5),
    ("sad", -2.1),
    ("scary", -2.2),
    ("shallow", -1.2),
    ("sick", -2.3),
    ("silly", -0.1),
    ("slow", -0.9),
    ("stupid", -2.4),
    ("suffer", -2.5),
    ("terrible", -2.1),
    ("tragedy", -3.4),
    ("tragic", -3.0),
    ("trash", -2.2),
    ("ugly", -2.3),
    ("unbearable", -2.7),
    ("underwhelming", -1.5),
    ("unfunny", -1.7),
    ("uninspired", -1.6),
    ("upset", -1.6),
    ("violence", -3.1),
    ("violent", -2.9),
    ("war", -2.9),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("weak", -1.9),
    ("weird", -0.7),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -2.7),
    ("wrong", -2.1),
];

/// Intensity modifiers: positive entries amplify, negative entries dampen
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("truly", B_INCR),
    ("unbelievably", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
];

/// Words that flip the polarity of what follows
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neednt", "neither", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "rarely", "seldom", "shant", "shouldnt",
    "wasnt", "werent", "without", "wont", "wouldnt",
];

/// Booster increment
pub(crate) const B_INCR: f64 = 0.293;
/// Booster decrement
pub(crate) const B_DECR: f64 = -0.293;
