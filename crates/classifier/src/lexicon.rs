//! Embedded valence lexicon
//!
//! A compact VADER-style word list: each entry maps a lowercase token to a
//! valence in roughly [-4, 4]. Kept small and embedded so classifier
//! construction needs no file IO.

/// Word valences
pub const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("admire", 2.4),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bliss", 2.7),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("charming", 2.2),
    ("cheerful", 2.5),
    ("comfortable", 1.7),
    ("delight", 2.9),
    ("delighted", 2.9),
    ("delicious", 2.7),
    ("easy", 1.5),
    ("effective", 1.8),
    ("elegant", 2.1),
    ("enjoy", 2.2),
    ("enjoyed", 2.2),
    ("excellent", 3.0),
    ("excited", 2.4),
    ("fantastic", 2.9),
    ("favorite", 2.0),
    ("fine", 1.1),
    ("flawless", 2.8),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.9),
    ("impressed", 2.2),
    ("impressive", 2.3),
    ("incredible", 2.8),
    ("joy", 2.8),
    ("like", 1.5),
    ("liked", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("marvelous", 2.9),
    ("nice", 1.8),
    ("outstanding", 3.1),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 2.1),
    ("recommend", 1.6),
    ("reliable", 1.9),
    ("satisfied", 2.0),
    ("smooth", 1.4),
    ("solid", 1.2),
    ("stunning", 2.8),
    ("superb", 3.0),
    ("thanks", 1.9),
    ("useful", 1.8),
    ("wonderful", 2.7),
    ("worth", 1.4),
    ("wow", 2.6),
    // Negative
    ("angry", -2.3),
    ("annoying", -1.9),
    ("appalling", -2.9),
    ("awful", -2.9),
    ("bad", -2.5),
    ("boring", -1.6),
    ("broken", -2.0),
    ("cheap", -1.2),
    ("confusing", -1.4),
    ("crap", -2.6),
    ("defective", -2.2),
    ("disappointed", -2.1),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("disgusting", -3.0),
    ("dreadful", -2.8),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failure", -2.4),
    ("faulty", -2.0),
    ("frustrating", -2.1),
    ("garbage", -2.5),
    ("hate", -2.7),
    ("hated", -2.7),
    ("horrible", -2.9),
    ("hurt", -2.0),
    ("lousy", -2.2),
    ("mediocre", -0.9),
    ("mess", -1.6),
    ("miserable", -2.7),
    ("nasty", -2.6),
    ("pathetic", -2.5),
    ("poor", -1.9),
    ("problem", -1.3),
    ("regret", -2.0),
    ("rubbish", -2.3),
    ("sad", -2.1),
    ("scam", -2.8),
    ("slow", -1.1),
    ("terrible", -2.5),
    ("trash", -2.4),
    ("ugly", -2.2),
    ("unusable", -2.4),
    ("useless", -2.3),
    ("waste", -2.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -1.7),
];

/// Tokens that invert the valence of a following word
pub const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "cant", "dont", "doesnt", "didnt", "isnt",
    "wasnt", "wont", "without", "hardly", "barely",
];

/// Tokens that intensify (positive boost) or dampen (negative boost) the
/// valence of a following word
pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("very", 0.293),
    ("kinda", -0.293),
    ("kindof", -0.293),
    ("marginally", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];
