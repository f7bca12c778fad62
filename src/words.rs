//! Word Selector
//!
//! Picks the round's target word from a curated list of common English
//! words. The validating picker probes a bounded number of shuffled
//! candidates against the dictionary until one has both a definition and a
//! real example sentence; the plain picker trusts the sentence fallback and
//! skips validation entirely.

use crate::dictionary::ContentResolver;
use crate::error::{SpellError, SpellResult};
use rand::seq::SliceRandom;
use tracing::debug;

/// Default cap on target word length
pub const DEFAULT_MAX_LENGTH: usize = 8;

/// At most this many candidates are checked against the dictionary per
/// pick. Keeps the network cost of one selection bounded.
const PROBE_BUDGET: usize = 15;

/// Curated list of common English words suitable for spelling practice.
/// Most of them carry a definition and an example sentence in the Free
/// Dictionary API, which the validating picker confirms before use.
pub const WORD_LIST: &[&str] = &[
    "able", "arch", "bake", "bald", "bold", "calm",
    "cave", "clue", "coil", "crop", "cure", "dare",
    "dawn", "deed", "dome", "dose", "dusk", "dust",
    "ease", "edge", "envy", "evil", "face", "fade",
    "fame", "fate", "fawn", "firm", "flag", "flat",
    "flaw", "flip", "fold", "folk", "fond", "fool",
    "form", "foul", "fuel", "fury", "fuse", "gaze",
    "gift", "glow", "grab", "grid", "grim", "grip",
    "grow", "gulf", "halt", "harm", "haze", "heal",
    "heap", "herb", "herd", "hint", "hire", "host",
    "howl", "huge", "hurl", "hymn", "icon", "idle",
    "iron", "item", "jade", "jest", "jolt", "keen",
    "kind", "knot", "lace", "lamp", "lane", "lash",
    "lawn", "lead", "lean", "leap", "limb", "limp",
    "link", "load", "lobe", "lock", "loft", "loom",
    "loot", "lure", "lurk", "lush", "mane", "maze",
    "melt", "mild", "mine", "moan", "mock", "mold",
    "mood", "muse", "mute", "myth", "neat", "nest",
    "numb", "oath", "odds", "omen", "ooze", "oven",
    "pace", "pack", "palm", "pave", "peak", "peel",
    "pest", "pile", "pine", "plot", "ploy", "plug",
    "plum", "poke", "pond", "pose", "pour", "pray",
    "prey", "prop", "pull", "pump", "pure", "push",
    "quit", "race", "rage", "raid", "ramp", "rank",
    "rare", "rash", "reap", "reel", "roam", "robe",
    "rope", "ruin", "rule", "rush", "rust", "sage",
    "sake", "sane", "scan", "seal", "shed", "skim",
    "slab", "slam", "slap", "slim", "slip", "slot",
    "slug", "snap", "soar", "sole", "sore", "sort",
    "soul", "span", "spin", "spit", "stem", "stir",
    "stub", "sway", "swim", "tale", "tame", "tank",
    "tart", "task", "taut", "tear", "thaw", "tide",
    "tile", "tilt", "toil", "toll", "tomb", "tone",
    "toss", "tour", "trap", "tray", "trim", "trot",
    "tuck", "turf", "turn", "urge", "vain", "vast",
    "veil", "vent", "vest", "vine", "void", "volt",
    "wade", "wage", "wail", "ward", "warm", "warn",
    "warp", "wary", "wave", "weed", "weld", "whim",
    "wilt", "wipe", "wise", "wisp", "woke", "womb",
    "wrap", "yard", "yawn", "yell", "zeal", "zone",
    "adapt", "admit", "adopt", "agony", "alarm", "alien",
    "align", "amber", "amend", "ample", "angel", "anger",
    "apart", "arena", "arise", "attic", "avoid", "await",
    "awake", "award", "batch", "beach", "beast", "begin",
    "blame", "bland", "blank", "blast", "blaze", "bleed",
    "blend", "bless", "bliss", "bloom", "blunt", "blush",
    "boast", "bonus", "boost", "brace", "brave", "bravo",
    "breed", "brink", "brisk", "broad", "brook", "brood",
    "brush", "burst", "cabin", "candy", "chain", "chair",
    "chant", "charm", "chase", "cheap", "cheek", "cheer",
    "chess", "chief", "child", "chill", "choir", "chore",
    "chunk", "civil", "claim", "clamp", "clash", "clasp",
    "clean", "clear", "clerk", "cliff", "climb", "cling",
    "cloak", "clone", "close", "cloth", "cloud", "coach",
    "coast", "comet", "coral", "count", "court", "cover",
    "crack", "craft", "crane", "crash", "crave", "crawl",
    "craze", "creek", "creep", "crest", "crime", "crisp",
    "cross", "crowd", "crown", "crude", "cruel", "crush",
    "curse", "curve", "cycle", "daily", "dance", "decay",
    "decoy", "delay", "dense", "deter", "devil", "diary",
    "dizzy", "dodge", "doubt", "dough", "draft", "drain",
    "drape", "dream", "drift", "drill", "drive", "drown",
    "dwell", "eager", "earth", "eerie", "elder", "elect",
    "elite", "elude", "ember", "empty", "endow", "enjoy",
    "equal", "equip", "erode", "erupt", "essay", "evade",
    "event", "exalt", "exert", "exile", "extra", "fable",
    "faint", "fairy", "faith", "feast", "fiber", "field",
    "fiery", "filth", "final", "flame", "flare", "flash",
    "fleet", "flesh", "float", "flock", "flood", "floor",
    "flora", "floss", "flour", "forge", "found", "frail",
    "frame", "frank", "fraud", "freak", "fresh", "front",
    "frost", "frown", "fruit", "ghost", "giant", "given",
    "gleam", "glide", "globe", "gloom", "glory", "gloss",
    "gorge", "grace", "grade", "grain", "grand", "grant",
    "grasp", "grass", "grave", "graze", "greed", "greet",
    "grief", "grill", "grind", "groan", "groom", "gross",
    "group", "grove", "growl", "guard", "guess", "guest",
    "guide", "guild", "guilt", "guise", "hairy", "harsh",
    "haste", "haunt", "haven", "heart", "hedge", "heist",
    "hoist", "honor", "horse", "house", "human", "humid",
    "humor", "ideal", "image", "imply", "inert", "inner",
    "irony", "ivory", "jewel", "joker", "jolly", "juice",
    "knack", "kneel", "knife", "knock", "labor", "layer",
    "lemon", "level", "lever", "light", "linen", "liver",
    "lodge", "logic", "loose", "lover", "loyal", "lucid",
    "lunar", "lunge", "magic", "major", "manor", "maple",
    "march", "marsh", "match", "mayor", "medal", "mercy",
    "merit", "metal", "might", "mirth", "model", "money",
    "moral", "mourn", "mouse", "mouth", "muddy", "nerve",
    "noble", "noise", "novel", "nurse", "ocean", "orbit",
    "order", "organ", "outer", "oxide", "paint", "panel",
    "panic", "patch", "pause", "peace", "peach", "pearl",
    "phase", "piano", "pilot", "pitch", "pivot", "pixel",
    "place", "plain", "plane", "plant", "plate", "plead",
    "plaza", "pluck", "plumb", "plume", "plump", "plunge",
    "poach", "point", "polar", "porch", "pouch", "pound",
    "power", "prank", "prawn", "press", "price", "pride",
    "prime", "print", "prior", "prism", "probe", "prone",
    "proof", "prose", "proud", "prove", "prowl", "pulse",
    "purge", "quest", "queue", "quick", "quiet", "quota",
    "quote", "radar", "raise", "rally", "ranch", "range",
    "rapid", "razor", "reach", "realm", "rebel", "refer",
    "reign", "relax", "repay", "rider", "ridge", "rifle",
    "rigid", "rinse", "risky", "rival", "river", "roast",
    "robot", "rouge", "rough", "round", "route", "royal",
    "rugby", "saint", "salad", "sauce", "scale", "scare",
    "scene", "scent", "scope", "score", "scout", "scrap",
    "seize", "serve", "shade", "shaft", "shake", "shame",
    "shape", "share", "shark", "sharp", "shave", "sheer",
    "sheet", "shelf", "shell", "shift", "shine", "shock",
    "shore", "shout", "sight", "since", "skill", "skull",
    "slash", "slate", "slave", "sleep", "slice", "slide",
    "slope", "smash", "smell", "smile", "smoke", "snack",
    "snare", "solar", "solid", "solve", "space", "spare",
    "spark", "spawn", "speak", "spear", "spell", "spend",
    "spill", "spine", "spite", "spoke", "spoon", "spray",
    "squad", "stack", "staff", "stage", "stain", "stair",
    "stake", "stale", "stall", "stamp", "stand", "stare",
    "start", "state", "steak", "steal", "steam", "steel",
    "steep", "steer", "stern", "stick", "stiff", "still",
    "sting", "stock", "stone", "stool", "storm", "story",
    "stout", "stove", "strap", "straw", "stray", "strip",
    "stuff", "stump", "stung", "stunt", "surge", "swamp",
    "swarm", "swear", "sweat", "sweep", "sweet", "swell",
    "swept", "swift", "swing", "swirl", "sword", "syrup",
    "taste", "teach", "theft", "theme", "thick", "thief",
    "thorn", "those", "three", "throw", "thumb", "tiger",
    "tight", "timer", "toast", "token", "torch", "total",
    "touch", "tough", "towel", "tower", "toxic", "trace",
    "track", "trade", "trail", "train", "trait", "tramp",
    "trash", "treat", "trend", "trial", "tribe", "trick",
    "troop", "truck", "truly", "trunk", "trust", "truth",
    "tumor", "twist", "ultra", "uncle", "under", "unify",
    "union", "unite", "unity", "upper", "upset", "urban",
    "usual", "utter", "valid", "valor", "value", "vapor",
    "vault", "verge", "verse", "vigor", "vinyl", "virus",
    "visit", "vital", "vivid", "vocal", "vodka", "voice",
    "voter", "waist", "waste", "watch", "water", "weary",
    "weave", "wheat", "wheel", "whole", "widen", "witch",
    "world", "worry", "worse", "worst", "worth", "wound",
    "wrath", "wreck", "yacht", "yield", "young", "youth",
    "absorb", "accent", "access", "accuse", "across", "admire",
    "advent", "affirm", "afford", "agenda", "almost", "always",
    "anchor", "annual", "appeal", "arouse", "arrest", "artist",
    "assign", "assume", "assure", "attach", "attack", "attain",
    "attend", "banter", "barely", "basket", "battle", "beacon",
    "beauty", "behalf", "belong", "betray", "bitter", "blanch",
    "bonfire", "borrow", "bounce", "breach", "breath", "breeze",
    "bridge", "bright", "broken", "bronze", "budget", "bundle",
    "burden", "butter", "bypass", "candle", "canyon", "carbon",
    "castle", "caught", "cement", "chance", "chapel", "charge",
    "choose", "chosen", "circle", "clever", "clinic", "closet",
    "clumsy", "coarse", "colony", "column", "combat", "comedy",
    "commit", "common", "compel", "convey", "cosmos", "cotton",
    "couple", "cradle", "create", "crisis", "cruise", "custom",
    "dagger", "damage", "danger", "debate", "decade", "decent",
    "defeat", "defend", "define", "defuse", "degree", "demand",
    "demise", "desert", "design", "desire", "detail", "detect",
    "devote", "differ", "digest", "divert", "double", "dragon",
    "duster", "empire", "enable", "endure", "energy", "engage",
    "enrich", "ensure", "errand", "escape", "evolve", "exceed",
    "excite", "exempt", "expand", "expect", "expert", "export",
    "expose", "extend", "extent", "fabric", "famine", "father",
    "fathom", "feeble", "fierce", "figure", "filter", "finger",
    "fiscal", "flaunt", "flavor", "flight", "flower", "forbid",
    "forest", "forget", "fossil", "foster", "freeze", "frozen",
    "fulfil", "fumble", "futile", "galaxy", "gamble", "garden",
    "gather", "gentle", "geyser", "ginger", "global", "gloves",
    "golden", "gossip", "govern", "gravel", "grocer", "ground",
    "growth", "grudge", "gutter", "hammer", "handle", "happen",
    "harbor", "hazard", "hinder", "hollow", "honest", "humane",
    "humble", "hunger", "hurdle", "hustle", "ignore", "immune",
    "impact", "impair", "import", "impose", "incite", "income",
    "infant", "inform", "inject", "insect", "insist", "insult",
    "intact", "intend", "invade", "invent", "invest", "invoke",
    "island", "jarred", "jargon", "jigsaw", "jockey", "jostle",
    "jumble", "jungle", "junior", "kidnap", "kindle", "knight",
    "launch", "lather", "leader", "legend", "lesson", "letter",
    "linger", "listen", "litter", "little", "lively", "loathe",
    "locale", "lovely", "luxury", "maiden", "manage", "manner",
    "marble", "margin", "market", "marvel", "master", "matter",
    "meadow", "medium", "member", "memoir", "memory", "menace",
    "mental", "mentor", "method", "middle", "mingle", "mirror",
    "modest", "molten", "moment", "mortal", "mother", "motion",
    "motive", "murder", "muscle", "museum", "mutton", "muzzle",
    "mystic", "narrow", "nation", "nature", "nearby", "neatly",
    "needle", "nestle", "nimble", "noodle", "normal", "notice",
    "notion", "nozzle", "number", "object", "obtain", "occupy",
    "offend", "office", "oppose", "option", "orange", "orient",
    "origin", "orphan", "outfit", "outlet", "output", "outset",
    "palace", "parade", "parcel", "parent", "parody", "patrol",
    "patron", "pebble", "peddle", "pencil", "people", "permit",
    "person", "pickle", "pillar", "pillow", "pirate", "piston",
    "plague", "planet", "pledge", "pocket", "poison", "police",
    "policy", "polish", "polite", "ponder", "portal", "prayer",
    "prison", "profit", "prompt", "propel", "public", "puddle",
    "punish", "pursue", "puzzle", "quarry", "quench", "rabbit",
    "racial", "radish", "random", "ransom", "rattle", "ravage",
    "reason", "recall", "reckon", "record", "reduce", "reform",
    "refund", "regard", "regret", "reject", "relate", "relief",
    "relish", "remedy", "remind", "remote", "remove", "render",
    "rental", "repair", "repeal", "repeat", "report", "rescue",
    "reside", "resign", "resist", "resort", "result", "retail",
    "retire", "reveal", "revolt", "reward", "ribbon", "riddle",
    "ripple", "ritual", "robust", "rocket", "rotate", "rubble",
    "rumble", "sacred", "saddle", "safari", "safety", "salute",
    "sample", "scarce", "scheme", "season", "secret", "secure",
    "select", "senior", "serene", "settle", "severe", "shadow",
    "shaman", "shield", "signal", "silent", "silver", "simple",
    "siphon", "sister", "sketch", "sleepy", "slight", "smooth",
    "snatch", "sniffle", "social", "soften", "soothe", "sorrow",
    "source", "sphere", "spiral", "spirit", "splash", "sponge",
    "sprawl", "spring", "stable", "stammer", "starch", "statue",
    "steady", "stolen", "strain", "strand", "stream", "street",
    "stride", "strike", "string", "stripe", "strive", "stroke",
    "strong", "studio", "submit", "subtle", "sudden", "suffer",
    "summit", "summon", "supply", "temple", "temper", "tender",
    "thirst", "thrill", "thrive", "throne", "throng", "throat",
    "thrust", "ticket", "timber", "tissue", "tongue", "treaty",
    "tremor", "tribal", "trophy", "tumble", "tunnel", "turtle",
    "tycoon", "unique", "unrest", "unveil", "upbeat", "update",
    "uphold", "upkeep", "uproar", "useful", "utmost", "vacant",
    "valley", "vandal", "vanish", "velvet", "vendor", "vessel",
    "violin", "virtue", "volume", "voyage", "vulgar", "waffle",
    "wander", "warmth", "weapon", "weaken", "wealth", "weasel",
    "whisky", "wicked", "willow", "winder", "window", "winter",
    "wisdom", "wonder", "wreath", "writhe", "zenith", "abandon",
    "abdomen", "ability", "abolish", "absence", "academy", "achieve",
    "acquire", "address", "admiral", "advance", "adverse", "afflict",
    "agonize", "ailment", "allegro", "already", "amateur", "amazing",
    "amnesty", "amplify", "ancient", "angular", "anxiety", "appease",
    "archive", "outlook", "balance", "bargain", "battery", "beastly",
    "beneath", "benefit", "bewitch", "billion", "blanket", "blemish",
    "blessed", "bonanza", "boulder", "bourbon", "boycott", "breaker",
    "bristle", "brother", "cabinet", "camel", "captive", "caution",
    "certain", "chamber", "channel", "chapter", "chariot", "chimney",
    "circuit", "cluster", "comfort", "command", "compact", "company",
    "compete", "complex", "concern", "conduct", "confide", "confuse",
    "connect", "conquer", "consent", "consort", "consume", "contain",
    "content", "contest", "control", "convert", "correct", "council",
    "counsel", "counter", "country", "courage", "crusade", "crumble",
    "crystal", "culture", "current", "cushion", "customs", "daylight",
    "declare", "decline", "delight", "deliver", "descent", "deserve",
    "despair", "despise", "destiny", "develop", "devious", "digital",
    "dilemma", "diploma", "discard", "disease", "disgust", "display",
    "dispute", "distant", "distort", "disturb", "divorce", "dolphin",
    "earmark", "eastern", "educate", "elderly", "elegant", "element",
    "elevate", "embrace", "emotion", "emperor", "empower", "enchant",
    "endless", "enforce", "enhance", "enquire", "episode", "erosion",
    "evident", "examine", "example", "exhaust", "exhibit", "expense",
    "explain", "exploit", "explore", "extract", "extreme", "eyebrow",
    "factual", "failure", "fashion", "fiction", "finance", "fitness",
    "flannel", "flatter", "flourish", "forearm", "foreign", "forever",
    "formula", "fortune", "founder", "fragile", "freight", "fulfill",
    "furnace", "gallant", "general", "genuine", "gesture", "glimpse",
    "gondola", "gradual", "granite", "grapple", "gravity", "grizzly",
    "habitat", "halcyon", "halfway", "handsome", "harmony", "harvest",
    "healthy", "helpful", "heroine", "heroism", "highway", "history",
    "holiday", "horizon", "hostile", "housing", "husband", "illegal",
    "imagine", "immense", "implant", "implore", "improve", "impulse",
    "inbound", "include", "inflate", "inherit", "initial", "inquiry",
    "insight", "inspect", "install", "instead", "involve", "isolate",
    "javelin", "journey", "justice", "justify", "kindred", "kingdom",
    "kitchen", "knuckle", "lantern", "lateral", "laundry", "leaflet",
    "leather", "leisure", "lettuce", "liberty", "library", "mansion",
    "measure", "miracle", "mission", "mistake", "mixture", "monster",
    "morning", "musical", "mystery", "neglect", "neutral", "notable",
    "nucleus", "nurture", "obscure", "observe", "obvious", "offense",
    "omnibus", "opinion", "optimal", "organic", "outline", "outside",
    "overall", "painful", "palette", "passage", "passion", "patient",
    "pattern", "penalty", "pending", "pension", "percent", "perfect",
    "persist", "pilgrim", "pioneer", "plastic", "plaster", "playful",
    "popcorn", "popular", "portion", "poverty", "predict", "premise",
    "prepare", "present", "prevail", "prevent", "primary", "private",
    "problem", "proceed", "produce", "profile", "program", "project",
    "promise", "promote", "prosper", "protect", "protein", "protest",
    "provide", "publish", "pyramid", "quarter", "radical", "qualify",
    "realize", "receipt", "reclaim", "recover", "reflect", "refugee",
    "reunion", "routine", "rummage", "rupture", "sadness", "satisfy",
    "scatter", "scholar", "scratch", "section", "selfish", "serious",
    "service", "session", "shelter", "sheriff", "sidecar", "silence",
    "sincere", "slender", "slumber", "soldier", "sponsor", "squeeze",
    "stadium", "startle", "station", "stomach", "storage", "strange",
    "student", "stumble", "subject", "succeed", "suggest", "support",
    "suppose", "surface", "surplus", "survive", "suspect", "sustain",
    "symptom", "thought", "thunder", "tobacco", "tonight", "torment",
    "torpedo", "tourism", "trainer", "trouble", "trivial", "trumpet",
    "turmoil", "typical", "undergo", "uniform", "unknown", "unusual",
    "utensil", "utility", "vampire", "venture", "version", "veteran",
    "vibrant", "victory", "village", "villain", "vintage", "violent",
    "virtual", "visible", "volcano", "warrant", "warrior", "weather",
    "weaving", "welcome", "western", "whisper", "whistle", "witness",
    "worship", "wounded", "wrestle", "absolute", "accident", "accurate",
    "activate", "actually", "advocate", "aircraft", "allergic", "altitude",
    "ambition", "amputate", "ancestor", "announce", "antibody", "appetite",
    "applause", "approach", "approval", "backyard", "bankrupt", "boldness",
    "boundary", "bracelet", "building", "business", "calendar", "campaign",
    "casualty", "cautious", "ceremony", "champion", "charging", "children",
    "chivalry", "climbing", "collapse", "colonial", "colorful", "commence",
    "complain", "complete", "compound", "comprise", "conclude", "concrete",
    "conflict", "congress", "confront", "consider", "conspire", "constant",
    "contempt", "contrast", "converge", "convince", "creature", "criminal",
    "cultural", "currency", "customer", "darkness", "daughter", "deadline",
    "decorate", "dedicate", "delegate", "delicate", "demolish", "designer",
    "dialogue", "dinosaur", "diplomat", "disaster", "disclaim", "discount",
    "discover", "disguise", "displace", "dissolve", "distance", "distinct",
    "doctrine", "document", "dominate", "drainage", "dramatic", "duration",
    "dwelling", "dynamite", "earnings", "economic", "educator", "election",
    "elegance", "elephant", "elongate", "emphasis", "emulsify", "endeavor",
    "enormous", "envelope", "equality", "equipped", "escalate", "estimate",
    "eternity", "evaluate", "evidence", "exchange", "exercise", "explicit",
    "explorer", "external", "fabulous", "facility", "faithful", "familiar",
    "feminine", "festival", "fixation", "flagship", "flexible", "folklore",
    "footwear", "forecast", "forensic", "forested", "fragment", "frequent",
    "frontier", "fraction", "fruitful", "fullness", "function", "gambling",
    "generate", "genocide", "glorious", "goalpost", "graceful", "gradient",
    "graduate", "graffiti", "grateful", "guardian", "habitual", "hallmark",
    "handbook", "handmade", "hardware", "headline", "helpless", "hesitate",
    "highland", "homework", "honestly", "horrible", "hospital", "humanity",
    "identity", "ideology", "illusion", "immature", "imperial", "incident",
    "increase", "indicate", "indirect", "industry", "inferior", "infinite",
    "informal", "inherent", "innocent", "insecure", "interior", "intimate",
    "invasion", "inventor", "isolated", "judgment", "keepsake", "keyboard",
    "kindness", "labeling", "laughter", "language", "leverage", "lifelong",
    "lifetime", "literary", "location", "lonesome", "lukewarm", "magnetic",
    "maintain", "majority", "marathon", "marginal", "marriage", "material",
    "maximize", "mechanic", "medieval", "membrane", "memorial", "merchant",
    "midnight", "militant", "minimize", "minister", "minority", "moderate",
    "moisture", "molecule", "momentum", "monopoly", "morality", "mortgage",
    "movement", "multiply", "national", "navigate", "negative", "neighbor",
    "nominate", "notebook", "nuisance", "numerous", "obstacle", "occasion",
    "official", "offshore", "omission", "opponent", "opposite", "optimism",
    "ordinary", "organism", "organize", "original", "overcome", "overlook",
    "overturn", "painting", "pamphlet", "paradise", "parallel", "parasite",
    "pastoral", "patience", "peaceful", "peculiar", "perceive", "personal",
    "persuade", "petition", "physical", "platform", "pleasant", "pleasure",
    "plumbing", "poignant", "polished", "politics", "populate", "populace",
    "portrait", "position", "positive", "possible", "powerful", "practice",
    "precious", "preclude", "pregnant", "premiere", "prepared", "preserve",
    "pressure", "previous", "priority", "probable", "producer", "profound",
    "progress", "prohibit", "prolific", "promised", "promptly", "properly",
    "proposal", "prospect", "prostate", "protocol", "province", "publicly",
    "purchase", "pursuant", "quantity", "question", "reaction", "reassure",
    "reckless", "recovery", "regional", "regulate", "rehearse", "relative",
    "relevant", "reliable", "religion", "remember", "renowned", "repeated",
    "reporter", "republic", "requires", "research", "resemble", "resident",
    "resource", "response", "restless", "restrict", "revision", "rhetoric",
    "romantic", "ruthless", "sabotage", "sanction", "sandwich", "saturate",
    "scenario", "schedule", "scrutiny", "seashore", "security", "semester",
    "sentence", "separate", "sequence", "shortage", "shoulder", "simplify",
    "skeleton", "situated", "slippery", "snapshot", "software", "solitary",
    "somebody", "somewhat", "spectral", "sporting", "standard", "standing",
    "stimulus", "straight", "stranger", "strategy", "strength", "striking",
    "struggle", "stubborn", "stunning", "suburban", "suddenly", "superior",
    "suppress", "surprise", "surround", "survival", "suspense", "swimming",
    "sympathy", "syndrome", "tailored", "takeover", "tangible", "taxation",
    "teenager", "temporal", "tendency", "terminal", "terrific", "thankful",
    "thousand", "thriller", "tolerant", "tomorrow", "training", "transfer",
    "treasure", "tribunal", "tropical", "truthful", "turnover", "ultimate",
    "umbrella", "uncommon", "underway", "unlikely", "unplug", "unstable",
    "unwanted", "upcoming", "uprising", "validate", "valuable", "variable",
    "vehement", "vigilant", "violence", "volatile", "weakness", "workshop",
    "yearning",
];

fn candidates(max_length: usize) -> Vec<&'static str> {
    WORD_LIST
        .iter()
        .copied()
        .filter(|w| w.len() <= max_length && w.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

/// Pick a random word of at most `max_length` characters, no validation.
/// The sentence fallback guarantees every word can still be presented.
pub fn pick_any(max_length: usize) -> SpellResult<String> {
    let pool = candidates(max_length);
    pool.choose(&mut rand::thread_rng())
        .map(|w| w.to_string())
        .ok_or_else(|| {
            SpellError::WordList(format!("no words of length <= {}", max_length))
        })
}

/// Pick a random word validated to have both a definition and a fetched
/// example sentence. Probes at most [`PROBE_BUDGET`] shuffled candidates;
/// if none validates (API down, for instance), degrades to an unvalidated
/// pick so a round can always start.
pub async fn pick_validated(
    resolver: &ContentResolver,
    max_length: usize,
) -> SpellResult<String> {
    let mut pool = candidates(max_length);
    if pool.is_empty() {
        return Err(SpellError::WordList(format!(
            "no words of length <= {}",
            max_length
        )));
    }
    pool.shuffle(&mut rand::thread_rng());

    for word in pool.iter().take(PROBE_BUDGET) {
        if resolver.definition(word).await.is_some()
            && resolver.fetched_example(word).await.is_some()
        {
            return Ok(word.to_string());
        }
        debug!("Candidate '{}' has incomplete dictionary data, skipping", word);
    }

    // None of the probed candidates validated. Hand out a word anyway; the
    // resolver's fallback chain still produces a definition notice and a
    // template sentence.
    debug!("No candidate validated within budget, picking unvalidated");
    let word = pool.choose(&mut rand::thread_rng()).unwrap();
    Ok(word.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_is_clean() {
        for word in WORD_LIST {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "'{}' is not lowercase alphabetic",
                word
            );
        }
    }

    #[test]
    fn test_pick_any_respects_length_and_alphabet() {
        for _ in 0..50 {
            let word = pick_any(DEFAULT_MAX_LENGTH).unwrap();
            assert!(word.len() <= DEFAULT_MAX_LENGTH, "'{}' too long", word);
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_pick_any_shorter_cap() {
        for _ in 0..50 {
            let word = pick_any(5).unwrap();
            assert!(word.len() <= 5, "'{}' too long", word);
        }
    }

    #[test]
    fn test_pick_any_impossible_cap_errors() {
        assert!(matches!(pick_any(1), Err(SpellError::WordList(_))));
    }

    #[tokio::test]
    async fn test_pick_validated_degrades_when_api_unreachable() {
        let mut config = crate::config::Config::default();
        config.api_base_url = "http://127.0.0.1:9".to_string();
        config.request_timeout_secs = 1;
        let resolver = ContentResolver::new(crate::dictionary::DictionaryClient::new(&config));

        // Every probe fails, so the degraded path must still return a word
        // meeting the filter constraints.
        let word = pick_validated(&resolver, DEFAULT_MAX_LENGTH).await.unwrap();
        assert!(word.len() <= DEFAULT_MAX_LENGTH);
        assert!(word.chars().all(|c| c.is_ascii_alphabetic()));
    }
}
