pub const DESCRIPTORS: &[&str] = &[
    "Forest",
    "Ancient",
    "Petrified",
    "Roaring",
    "Cascade",
    "Tumbling",
    "Silent",
    "Redwood",
    "Bullfrog",
    "Maple",
    "Misty",
    "Elk",
    "Grizzly",
    "Ocean",
    "Sea",
    "Sky",
    "Dusty",
    "Diamond",
];

pub const PLACES: &[&str] = &[
    "Flats",
    "Village",
    "Canyon",
    "Pond",
    "Group Camp",
    "Horse Camp",
    "Ghost Town",
    "Camp",
    "Dispersed Camp",
    "Backcountry",
    "River",
    "Creek",
    "Creekside",
    "Bay",
    "Spring",
    "Bayshore",
    "Sands",
    "Mule Camp",
    "Hunting Camp",
    "Cliffs",
    "Hollow",
];

pub const CITIES: &[(&str, &str)] = &[
    ("Denver", "CO"),
    ("Boulder", "CO"),
    ("Moab", "UT"),
    ("Flagstaff", "AZ"),
    ("Bend", "OR"),
    ("Missoula", "MT"),
    ("Jackson", "WY"),
    ("Taos", "NM"),
    ("Asheville", "NC"),
    ("Burlington", "VT"),
    ("Duluth", "MN"),
    ("Bozeman", "MT"),
    ("Sedona", "AZ"),
    ("Tahoe City", "CA"),
    ("Leavenworth", "WA"),
    ("Stowe", "VT"),
    ("Gatlinburg", "TN"),
    ("Estes Park", "CO"),
    ("Bar Harbor", "ME"),
    ("Marquette", "MI"),
];

pub const DESCRIPTION: &str =
    "Lorem ipsum dolor sit amet consectetur adipisicing elit. Perspiciatis deserunt, \
     nisi assumenda iste maiores blanditiis incidunt, non ad sequi facilis officia \
     iure corporis nemo similique odio voluptate distinctio! Magnam, quas!";

pub const IMAGE_URL: &str = "https://source.unsplash.com/collection/9046579";
