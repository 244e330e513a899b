//! Word lists sampled by [`FakeSource`](super::FakeSource).

pub(super) const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark",
    "Margaret", "Steven", "Sandra", "Andrew", "Ashley", "Joshua", "Emily", "Kevin", "Donna",
    "Brian", "Michelle", "George", "Carol", "Priya", "Wei", "Omar", "Sofia", "Mateo", "Aisha",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Nguyen", "Hill", "Flores", "Green", "Patel", "Chen", "Kim", "Okafor",
];

pub(super) const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "mail.example.com", "test.example.org",
];

pub(super) const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Sunset",
    "Ridge", "Highland", "Meadow", "River", "Church", "Mill", "Spring", "Valley",
];

pub(super) const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Way", "Boulevard", "Place",
];

pub(super) const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
    "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Dover", "Oxford", "Jackson",
];

pub(super) const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"), ("Arizona", "AZ"), ("California", "CA"), ("Colorado", "CO"),
    ("Florida", "FL"), ("Georgia", "GA"), ("Illinois", "IL"), ("Michigan", "MI"),
    ("New York", "NY"), ("Ohio", "OH"), ("Oregon", "OR"), ("Texas", "TX"),
    ("Virginia", "VA"), ("Washington", "WA"),
];

pub(super) const COUNTRIES: &[&str] = &[
    "United States", "Canada", "Mexico", "Brazil", "United Kingdom", "Ireland", "France",
    "Germany", "Spain", "Italy", "Netherlands", "Sweden", "Japan", "India", "Australia",
];

pub(super) const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd", "PLC"];

pub(super) const JOBS: &[&str] = &[
    "Accountant", "Architect", "Civil engineer", "Data scientist", "Dentist", "Electrician",
    "Graphic designer", "Librarian", "Mechanical engineer", "Nurse", "Pharmacist",
    "Software developer", "Teacher", "Translator", "Veterinarian",
];

pub(super) const WORDS: &[&str] = &[
    "alpha", "bridge", "candle", "delta", "echo", "forest", "garden", "harbor", "island",
    "jungle", "kettle", "lantern", "meadow", "nectar", "orbit", "pepper", "quartz", "river",
    "summit", "timber", "umbrella", "velvet", "willow", "yonder", "zephyr",
];

pub(super) const TLDS: &[&str] = &["com", "org", "net", "info", "biz"];
