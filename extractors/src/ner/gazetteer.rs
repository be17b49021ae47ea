//! Word lists used by the rule-based tagger and chunker. All entries are lowercase.

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
];

pub const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "via", "per", "about",
    "under", "over",
];

pub const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "&"];

// "us" and "it" are left out; on cards they are almost always country or department names
pub const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "she", "we", "they", "my", "our", "your", "his", "her", "their",
];

pub const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "dr", "prof", "sir", "dame", "rev",
];

pub const ORGANIZATION_WORDS: &[&str] = &[
    "inc",
    "incorporated",
    "llc",
    "llp",
    "ltd",
    "limited",
    "corp",
    "corporation",
    "co",
    "company",
    "tech",
    "technologies",
    "group",
    "solutions",
    "systems",
    "labs",
    "laboratories",
    "partners",
    "associates",
    "consulting",
    "holdings",
    "international",
    "industries",
    "enterprises",
    "ventures",
    "capital",
    "networks",
    "media",
    "studio",
    "studios",
    "bank",
    "university",
    "college",
    "institute",
    "foundation",
    "agency",
    "services",
    "gmbh",
    "plc",
];

pub const FACILITY_WORDS: &[&str] = &[
    "street", "st", "avenue", "ave", "road", "rd", "boulevard", "blvd", "drive", "lane", "ln",
    "way", "suite", "ste", "floor", "plaza", "building", "court", "parkway", "pkwy", "highway",
    "hwy", "route",
];

pub const LOCATION_WORDS: &[&str] = &[
    "usa",
    "america",
    "canada",
    "mexico",
    "england",
    "france",
    "germany",
    "india",
    "china",
    "japan",
    "virginia",
    "maryland",
    "california",
    "texas",
    "florida",
    "ohio",
    "oregon",
    "nevada",
    "arizona",
    "colorado",
    "massachusetts",
    "illinois",
    "michigan",
    "pennsylvania",
    "boston",
    "chicago",
    "seattle",
    "reston",
    "arlington",
    "london",
    "paris",
    "toronto",
    "berlin",
];

/// Given names recognised on their own, when a card shows a single word
pub const GIVEN_NAMES: &[&str] = &[
    "aaron", "adam", "alice", "amanda", "amy", "andrew", "anna", "arthur", "barbara", "ben",
    "brian", "carlos", "carol", "charles", "chris", "daniel", "david", "elizabeth", "emily",
    "emma", "eric", "george", "hannah", "henry", "jack", "james", "jane", "jennifer", "jessica",
    "john", "joseph", "julia", "karen", "kevin", "laura", "linda", "lisa", "maria", "mark",
    "mary", "matthew", "michael", "nancy", "olivia", "paul", "peter", "rachel", "richard",
    "robert", "sarah", "sophia", "steven", "susan", "thomas", "timothy", "william",
];

pub fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}
