//! Fixed vocabulary fragments used as synthesis inputs.
//!
//! The catalog is built once at startup and never mutated. All entries are
//! ASCII alphabetic, which is what lets the header serializer get away with
//! minimal escaping.

use rand::seq::SliceRandom;
use rand::Rng;

/// Selector for one of the four catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSet {
    Prefixes,
    Suffixes,
    MiddleParts,
    BaseWords,
}

/// Immutable vocabulary catalog.
///
/// Collections are ordered and fixed for the lifetime of the process. Tests
/// construct small ad hoc catalogs from string literals; production code uses
/// [`Catalog::english`].
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub prefixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub middle_parts: &'static [&'static str],
    pub base_words: &'static [&'static str],
}

impl Catalog {
    /// The built-in English fragment catalog.
    pub fn english() -> Self {
        Self {
            prefixes: PREFIXES,
            suffixes: SUFFIXES,
            middle_parts: MIDDLE_PARTS,
            base_words: BASE_WORDS,
        }
    }

    /// Borrow the collection named by `set`.
    pub fn words(&self, set: WordSet) -> &'static [&'static str] {
        match set {
            WordSet::Prefixes => self.prefixes,
            WordSet::Suffixes => self.suffixes,
            WordSet::MiddleParts => self.middle_parts,
            WordSet::BaseWords => self.base_words,
        }
    }

    /// Pick one entry uniformly at random from the collection named by `set`.
    ///
    /// Panics if the collection is empty, which the built-in catalog never is.
    pub fn pick<R: Rng + ?Sized>(&self, set: WordSet, rng: &mut R) -> &'static str {
        self.words(set)
            .choose(rng)
            .copied()
            .expect("catalog collection is empty")
    }
}

/// Common English morphological prefixes.
pub const PREFIXES: &[&str] = &[
    "un", "re", "in", "dis", "en", "non", "over", "mis", "sub", "pre", "inter", "fore", "de",
    "anti", "semi", "micro", "mini", "multi", "auto", "co", "counter", "out", "up", "under",
    "super", "trans", "extra", "ultra", "meta", "proto", "pseudo",
];

/// Short fragments usable standalone or with a prefix/suffix attached.
pub const MIDDLE_PARTS: &[&str] = &[
    "able", "ible", "tion", "sion", "ness", "ment", "ship", "hood", "ward", "wise", "like",
    "some", "full", "less", "most", "ever", "what", "where", "when", "which", "work", "play",
    "make", "take", "give", "come", "know", "think", "look", "want", "use", "find", "tell",
    "ask", "seem", "feel", "try", "leave", "call", "move", "live", "believe", "hold", "bring",
    "happen", "write", "provide", "sit", "stand", "lose", "pay", "meet", "include", "continue",
    "set", "learn", "change", "lead", "understand", "watch", "follow", "stop", "create",
    "speak", "read", "allow", "add", "spend", "grow", "open", "walk", "win", "offer",
    "remember", "love", "consider", "appear", "buy", "wait", "serve", "die", "send", "expect",
    "build", "stay", "fall", "cut", "reach", "kill", "remain", "suggest", "raise", "pass",
    "sell", "require", "report", "decide", "pull", "break", "pick", "wear", "paper", "system",
    "program", "question", "social", "economic", "medical", "political", "financial",
    "cultural", "natural", "international", "national", "local", "global", "personal",
    "professional", "educational", "historical", "scientific", "technical", "digital",
];

/// Common English morphological suffixes.
pub const SUFFIXES: &[&str] = &[
    "ing", "ed", "er", "est", "ly", "tion", "sion", "ness", "ment", "ful", "less", "able",
    "ible", "ous", "ive", "ent", "ant", "ary", "ory", "ic", "al", "ial", "ure", "age", "ism",
    "ist", "ite", "ize", "ise", "fy", "en", "ward", "wise", "like", "some", "fold", "teen",
    "ty", "th", "ship", "hood", "dom", "craft",
];

/// Base nouns, verbs and adjectives. Contains a few duplicates inherited from
/// the source word lists; they collapse in the builder's uniqueness set.
pub const BASE_WORDS: &[&str] = &[
    "action", "activity", "area", "book", "business", "case", "child", "company", "country",
    "course", "day", "development", "education", "end", "example", "experience", "fact",
    "family", "government", "group", "growth", "hand", "health", "history", "home", "house",
    "information", "interest", "job", "level", "life", "line", "management", "market",
    "member", "money", "name", "nation", "nature", "news", "number", "office", "order",
    "organization", "part", "party", "people", "person", "place", "plan", "point", "policy",
    "position", "power", "price", "problem", "process", "program", "project", "property",
    "public", "question", "reason", "report", "research", "result", "right", "room", "school",
    "science", "service", "side", "society", "something", "space", "special", "state",
    "story", "student", "study", "system", "technology", "term", "theory", "thing", "time",
    "trade", "training", "travel", "treatment", "university", "value", "war", "water", "way",
    "week", "woman", "word", "work", "world", "year", "young", "design", "computer",
    "network", "software", "internet", "website", "application", "database", "security",
    "mobile", "device", "platform", "solution", "innovation", "strategy", "analysis",
    "communication", "integration", "implementation", "optimization", "performance",
    "efficiency", "productivity", "quality", "standard", "framework", "architecture",
    "infrastructure", "maintenance", "support", "documentation", "interface", "protocol",
    "algorithm", "structure", "function", "operation", "procedure", "method", "approach",
    "technique", "model", "pattern", "concept", "principle", "foundation", "basis",
    "element", "component", "feature", "characteristic", "attribute", "property",
    "parameter", "variable", "constant", "resource", "material", "equipment", "tool",
    "instrument", "machine", "engine", "motor", "device", "apparatus", "mechanism",
    "circuit", "sensor", "controller", "processor", "memory", "storage", "display",
    "screen", "monitor", "keyboard", "mouse", "printer", "scanner", "camera", "microphone",
    "speaker", "headphone", "cable", "connector", "adapter", "battery", "charger", "power",
    "energy", "fuel", "electricity", "voltage", "current", "resistance", "frequency",
    "signal", "wave", "radiation", "light", "color", "sound", "music", "audio", "video",
    "image", "picture", "photo", "graphic", "text", "document", "file", "folder",
    "directory", "path", "location", "address", "contact", "phone", "email", "message",
    "letter", "package", "delivery", "shipping", "transport", "vehicle", "car", "truck",
    "bus", "train", "plane", "ship", "boat", "bicycle", "motorcycle",
];
