use regex::Regex;
use std::collections::HashMap;
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use crate::error::{AnalysisError, Result};
use crate::logging::OperationTimer;
use crate::models::{JoinedLine, PolarityScores, ScoredLine};

/// Normalization constant for the compound score
const ALPHA: f64 = 15.0;
/// Valence added or removed by a booster word
const BOOSTER_INCREMENT: f64 = 0.293;
/// Extra valence of a shouted word in otherwise mixed-case text
const CAPS_INCREMENT: f64 = 0.733;
/// Factor applied to a valence under negation
const NEGATION_SCALAR: f64 = -0.74;
/// Valence added per exclamation mark
const EXCLAMATION_INCREMENT: f64 = 0.292;
/// Valence added per question mark, when more than one is present
const QUESTION_INCREMENT: f64 = 0.18;

/// A function scoring the polarity of a single text.
///
/// Implementations must be deterministic: the same text always yields the
/// same scores.
pub trait PolarityScorer {
    /// Score one text
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores>;
}

/// Valence lexicon scorer with booster, negation and emphasis rules
pub struct LexiconScorer {
    max_text_length: usize,
    word_regex: Regex,
    lexicon: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    /// Create a scorer rejecting texts longer than `max_text_length` characters
    pub fn new(max_text_length: usize) -> Result<Self> {
        let word_regex = Regex::new(r"[\p{L}\p{N}']+")
            .map_err(|e| AnalysisError::Scoring(format!("Failed to compile word regex: {e}")))?;

        Ok(Self {
            max_text_length,
            word_regex,
            lexicon: LEXICON.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        })
    }

    fn valence(&self, words: &[&str], i: usize, caps_differ: bool) -> f64 {
        let word = words[i];
        let lower = word.to_lowercase();

        if self.boosters.contains_key(lower.as_str()) {
            return 0.0;
        }
        let Some(&base) = self.lexicon.get(lower.as_str()) else {
            return 0.0;
        };

        let mut valence = base;
        if caps_differ && is_shouted(word) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        // Boosters and negations reach back up to three words
        for (distance, decay) in [(1, 1.0), (2, 0.95), (3, 0.9)] {
            if i < distance {
                break;
            }
            let previous = words[i - distance];
            let previous_lower = previous.to_lowercase();

            if let Some(&boost) = self.boosters.get(previous_lower.as_str()) {
                let mut scalar = if valence < 0.0 { -boost } else { boost };
                if caps_differ && is_shouted(previous) {
                    scalar += CAPS_INCREMENT.copysign(valence);
                }
                valence += scalar * decay;
            }

            if is_negation(&previous_lower) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        let length = text.chars().count();
        if length > self.max_text_length {
            return Err(AnalysisError::Scoring(format!(
                "text of {length} characters exceeds the limit of {}",
                self.max_text_length
            )));
        }

        let normalized = text.nfc().collect::<String>();
        let words: Vec<&str> = self
            .word_regex
            .find_iter(&normalized)
            .map(|m| m.as_str().trim_matches('\''))
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Ok(PolarityScores::default());
        }

        let caps_differ = words.iter().any(|w| is_shouted(w)) && !words.iter().all(|w| is_shouted(w));

        let mut sentiments: Vec<f64> = (0..words.len())
            .map(|i| self.valence(&words, i, caps_differ))
            .collect();

        // Contrast: "but" weakens what precedes it and strengthens what follows
        if let Some(pivot) = words.iter().position(|w| w.eq_ignore_ascii_case("but")) {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < pivot {
                    *s *= 0.5;
                } else if i > pivot {
                    *s *= 1.5;
                }
            }
        }

        Ok(summarize(&sentiments, punctuation_emphasis(&normalized)))
    }
}

fn is_shouted(word: &str) -> bool {
    word.chars().count() > 1
        && word.chars().any(char::is_alphabetic)
        && word.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => 0.96,
    };

    exclamations * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize_compound(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn summarize(sentiments: &[f64], emphasis: f64) -> PolarityScores {
    let sum: f64 = sentiments.iter().sum();
    let compound = if sum > 0.0 {
        normalize_compound(sum + emphasis)
    } else if sum < 0.0 {
        normalize_compound(sum - emphasis)
    } else {
        0.0
    };

    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut neutral = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            positive += s + 1.0;
        } else if s < 0.0 {
            negative += s - 1.0;
        } else {
            neutral += 1.0;
        }
    }

    if positive > negative.abs() {
        positive += emphasis;
    } else if positive < negative.abs() {
        negative -= emphasis;
    }

    let total = positive + negative.abs() + neutral;
    if total == 0.0 {
        return PolarityScores::default();
    }

    PolarityScores {
        negative: round3(negative.abs() / total),
        neutral: round3(neutral / total),
        positive: round3(positive / total),
        compound: round3(compound),
    }
}

/// Result of scoring every joined line
#[derive(Debug, Clone, Default)]
pub struct ScoringOutcome {
    /// Lines with scores attached, in input order
    pub rows: Vec<ScoredLine>,
    /// Lines whose scoring failed and received zero scores
    pub failures: usize,
}

/// Score every line with exactly one scorer call per row.
///
/// A scorer error does not abort the run: the line gets zero scores and the
/// failure is counted.
pub fn score_lines(scorer: &dyn PolarityScorer, lines: Vec<JoinedLine>) -> ScoringOutcome {
    let timer = OperationTimer::new("score_lines");
    let mut failures = 0;

    let rows: Vec<ScoredLine> = lines
        .into_iter()
        .map(|line| {
            let sentiment = scorer.polarity_scores(&line.dialogue).unwrap_or_else(|e| {
                warn!(line_id = %line.line_id, error = %e, "Scoring failed, using zero scores");
                failures += 1;
                PolarityScores::default()
            });
            ScoredLine { line, sentiment }
        })
        .collect();

    debug!(rows = rows.len(), failures, "Scored dialogue lines");
    timer.finish();
    ScoringOutcome { rows, failures }
}

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nobody", "nowhere", "neither", "nor", "cannot",
    "without", "aint", "dont", "wont", "cant", "isnt", "wasnt", "didnt", "doesnt", "couldnt",
    "shouldnt", "wouldnt",
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("quite", BOOSTER_INCREMENT),
    ("most", BOOSTER_INCREMENT),
    ("more", BOOSTER_INCREMENT),
    ("damn", BOOSTER_INCREMENT),
    ("fucking", BOOSTER_INCREMENT),
    ("hella", BOOSTER_INCREMENT),
    ("such", BOOSTER_INCREMENT),
    ("too", BOOSTER_INCREMENT),
    ("barely", -BOOSTER_INCREMENT),
    ("hardly", -BOOSTER_INCREMENT),
    ("slightly", -BOOSTER_INCREMENT),
    ("somewhat", -BOOSTER_INCREMENT),
    ("kinda", -BOOSTER_INCREMENT),
    ("little", -BOOSTER_INCREMENT),
    ("less", -BOOSTER_INCREMENT),
    ("marginally", -BOOSTER_INCREMENT),
    ("rather", -BOOSTER_INCREMENT),
];

const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("happy", 2.7),
    ("joy", 2.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("like", 1.5),
    ("best", 3.2),
    ("better", 1.9),
    ("awesome", 3.1),
    ("perfect", 2.7),
    ("brilliant", 2.8),
    ("outstanding", 3.0),
    ("superb", 3.1),
    ("marvelous", 2.9),
    ("delightful", 2.9),
    ("pleased", 1.9),
    ("satisfied", 1.8),
    ("excited", 1.4),
    ("thrilled", 1.9),
    ("grateful", 2.0),
    ("blessed", 2.9),
    ("fortunate", 1.9),
    ("lucky", 1.8),
    ("successful", 2.8),
    ("victory", 2.6),
    ("win", 2.8),
    ("beautiful", 2.9),
    ("pretty", 2.2),
    ("nice", 1.8),
    ("fun", 2.3),
    ("funny", 1.9),
    ("glad", 2.0),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("please", 1.3),
    ("sweet", 2.0),
    ("kind", 2.4),
    ("friend", 2.2),
    ("friends", 2.1),
    ("smile", 1.5),
    ("laugh", 2.6),
    ("hope", 1.9),
    ("safe", 1.9),
    ("free", 2.3),
    ("fine", 0.8),
    ("okay", 0.9),
    ("ok", 1.2),
    ("yes", 1.7),
    ("cool", 1.3),
    ("care", 2.2),
    ("trust", 2.3),
    ("honest", 2.3),
    ("true", 1.8),
    ("right", 0.9),
    ("special", 1.7),
    ("alive", 1.6),
    ("romantic", 2.3),
    ("kiss", 1.8),
    ("hero", 2.6),
    ("brave", 2.4),
    ("proud", 2.1),
    ("respect", 2.1),
    ("peace", 2.5),
    ("heaven", 2.3),
    ("gorgeous", 3.0),
    ("terrific", 3.2),
    ("fabulous", 2.4),
    ("enjoy", 2.2),
    ("agree", 1.5),
    ("welcome", 2.0),
    ("congratulations", 2.9),
    ("promise", 1.3),
    ("winner", 2.8),
    ("rich", 2.6),
    ("wow", 2.8),
    // Negative
    ("bad", -2.5),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("worst", -3.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("dislike", -1.6),
    ("poor", -2.1),
    ("disappointing", -2.2),
    ("sad", -2.1),
    ("angry", -2.3),
    ("upset", -1.6),
    ("frustrated", -2.4),
    ("annoyed", -1.6),
    ("irritated", -1.8),
    ("disgusted", -2.4),
    ("furious", -2.7),
    ("devastated", -3.0),
    ("depressed", -2.3),
    ("miserable", -2.8),
    ("hopeless", -2.1),
    ("desperate", -1.3),
    ("worried", -1.2),
    ("anxious", -1.0),
    ("scared", -1.9),
    ("afraid", -2.0),
    ("disgusting", -2.4),
    ("revolting", -2.4),
    ("pathetic", -2.5),
    ("useless", -1.8),
    ("worthless", -1.9),
    ("kill", -3.7),
    ("killed", -3.5),
    ("dead", -3.3),
    ("die", -2.9),
    ("death", -2.9),
    ("murder", -3.7),
    ("hurt", -2.4),
    ("pain", -2.3),
    ("cry", -2.1),
    ("crying", -2.1),
    ("fear", -2.2),
    ("stupid", -2.4),
    ("idiot", -2.3),
    ("crazy", -1.4),
    ("sick", -2.3),
    ("wrong", -2.1),
    ("lie", -1.6),
    ("liar", -2.4),
    ("lost", -1.3),
    ("alone", -1.0),
    ("lonely", -1.5),
    ("sorry", -0.3),
    ("problem", -1.7),
    ("trouble", -1.7),
    ("hell", -3.6),
    ("shit", -2.6),
    ("fuck", -2.5),
    ("bitch", -2.8),
    ("bastard", -2.5),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("war", -2.9),
    ("fight", -1.6),
    ("hit", -1.1),
    ("gun", -1.4),
    ("blood", -1.4),
    ("ugly", -2.3),
    ("boring", -1.3),
    ("weird", -0.7),
    ("nervous", -1.1),
    ("guilty", -1.8),
    ("shame", -2.1),
    ("cruel", -2.8),
    ("evil", -3.4),
    ("enemy", -2.5),
    ("fail", -2.5),
    ("failed", -2.3),
    ("broke", -1.8),
    ("broken", -2.1),
    // Affection and praise
    ("adore", 2.6),
    ("adored", 2.9),
    ("adorable", 2.2),
    ("darling", 2.5),
    ("sweetheart", 2.6),
    ("honey", 1.6),
    ("dear", 1.6),
    ("beloved", 2.3),
    ("lover", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("likes", 1.8),
    ("liked", 1.8),
    ("romance", 2.6),
    ("hug", 2.1),
    ("cute", 2.0),
    ("charming", 2.8),
    ("handsome", 2.2),
    ("beauty", 2.8),
    ("sexy", 2.4),
    ("genius", 1.9),
    ("smart", 1.7),
    ("clever", 2.0),
    ("wise", 1.8),
    ("talented", 2.3),
    ("incredible", 2.2),
    ("magnificent", 2.4),
    ("splendid", 2.8),
    ("glorious", 2.9),
    ("impressive", 2.3),
    ("impressed", 2.1),
    ("admire", 2.1),
    ("amazed", 2.2),
    ("famous", 1.9),
    ("champion", 2.9),
    ("heroic", 2.6),
    ("precious", 2.7),
    ("treasure", 1.2),
    // Joy and comfort
    ("happier", 2.4),
    ("happiest", 3.2),
    ("happiness", 2.6),
    ("nicer", 1.9),
    ("nicest", 2.2),
    ("laughing", 2.2),
    ("laughed", 2.0),
    ("smiling", 2.3),
    ("smiled", 2.5),
    ("enjoyed", 2.3),
    ("enjoying", 2.4),
    ("exciting", 2.2),
    ("interesting", 1.7),
    ("delighted", 2.3),
    ("ecstatic", 2.8),
    ("cheer", 2.3),
    ("cheerful", 2.5),
    ("jolly", 2.3),
    ("merry", 2.5),
    ("playful", 1.9),
    ("party", 1.7),
    ("pleasure", 2.7),
    ("passion", 2.0),
    ("paradise", 3.2),
    ("miracle", 2.8),
    ("yay", 2.4),
    ("haha", 2.0),
    ("hooray", 2.3),
    ("yeah", 1.2),
    ("sure", 1.3),
    ("comfort", 1.5),
    ("comfortable", 1.8),
    ("calm", 1.3),
    ("relax", 1.9),
    ("relaxed", 2.2),
    ("relief", 2.1),
    ("relieved", 1.6),
    ("healthy", 1.7),
    ("strong", 2.3),
    ("strength", 2.2),
    ("courage", 2.2),
    ("hopeful", 1.6),
    ("optimistic", 1.3),
    ("enthusiastic", 1.9),
    ("inspired", 2.2),
    ("thankful", 2.7),
    ("appreciate", 1.7),
    ("bless", 1.8),
    ("blessing", 2.2),
    ("faith", 1.8),
    ("forgive", 1.1),
    ("forgiven", 1.6),
    // Gain and safety
    ("gift", 1.9),
    ("generous", 2.3),
    ("gentle", 1.9),
    ("help", 1.7),
    ("helpful", 1.8),
    ("support", 1.7),
    ("save", 2.2),
    ("saved", 1.2),
    ("rescue", 1.5),
    ("secure", 1.4),
    ("safety", 1.8),
    ("freedom", 3.2),
    ("fair", 1.3),
    ("favorite", 2.0),
    ("honor", 2.2),
    ("success", 2.7),
    ("succeed", 2.2),
    ("triumph", 2.1),
    ("prize", 2.3),
    ("reward", 2.1),
    ("wealth", 2.2),
    ("valuable", 2.1),
    ("useful", 1.9),
    ("truth", 1.3),
    ("innocent", 1.4),
    ("positive", 2.6),
    // Ruin and loss
    ("disaster", -3.1),
    ("catastrophe", -3.4),
    ("tragedy", -3.4),
    ("tragic", -3.4),
    ("crisis", -3.1),
    ("ruin", -2.8),
    ("ruined", -2.3),
    ("destroy", -2.5),
    ("destroyed", -3.4),
    ("damage", -2.2),
    ("harm", -2.5),
    ("injured", -1.7),
    ("painful", -2.3),
    ("hurts", -2.2),
    ("suffer", -2.5),
    ("suffering", -2.1),
    ("dying", -2.9),
    ("funeral", -1.5),
    ("doomed", -3.2),
    ("lose", -1.3),
    ("losing", -1.6),
    ("loser", -2.4),
    ("failure", -2.3),
    ("mistake", -1.4),
    ("worse", -2.1),
    ("problems", -1.7),
    ("abandoned", -2.1),
    ("rejected", -2.6),
    ("betray", -3.2),
    ("betrayed", -3.0),
    // Sorrow and fear
    ("sadness", -1.9),
    ("sorrow", -2.4),
    ("grief", -2.2),
    ("tears", -0.9),
    ("cried", -1.6),
    ("unhappy", -1.8),
    ("depressing", -1.6),
    ("disappointed", -1.9),
    ("disappointment", -2.3),
    ("regret", -1.8),
    ("guilt", -1.1),
    ("ashamed", -2.1),
    ("embarrassed", -1.5),
    ("humiliated", -2.1),
    ("worry", -1.9),
    ("confused", -1.3),
    ("tired", -1.9),
    ("exhausted", -1.5),
    ("bored", -1.1),
    ("ill", -1.8),
    ("terror", -3.0),
    ("terrified", -3.0),
    ("panic", -2.3),
    ("scary", -2.2),
    ("horror", -2.7),
    ("nightmare", -1.9),
    ("threat", -2.4),
    ("attack", -2.1),
    // Anger and contempt
    ("anger", -2.7),
    ("rage", -2.6),
    ("mad", -2.2),
    ("hatred", -3.2),
    ("hates", -1.9),
    ("hating", -2.3),
    ("jealous", -2.0),
    ("pissed", -3.2),
    ("annoying", -1.7),
    ("rude", -2.0),
    ("selfish", -2.1),
    ("nasty", -2.6),
    ("gross", -2.1),
    ("vile", -3.1),
    ("wicked", -2.4),
    ("monster", -1.9),
    ("devil", -3.4),
    ("poison", -2.5),
    ("curse", -2.5),
    ("cursed", -2.4),
    ("dumb", -2.3),
    ("fool", -1.9),
    ("moron", -2.2),
    ("jerk", -1.4),
    ("freak", -1.9),
    ("insane", -1.7),
    ("weak", -1.9),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("crap", -1.6),
    ("bullshit", -2.8),
    ("trash", -1.5),
    ("blame", -1.4),
    ("fault", -1.7),
    ("complain", -1.5),
    // Deceit and crime
    ("lies", -1.8),
    ("lied", -1.6),
    ("lying", -2.1),
    ("cheat", -2.0),
    ("cheated", -2.3),
    ("steal", -2.2),
    ("stole", -1.8),
    ("thief", -2.4),
    ("crime", -2.5),
    ("criminal", -2.4),
    ("prison", -2.3),
    ("jail", -2.2),
    ("punish", -2.4),
];
