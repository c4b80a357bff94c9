//! Fixed descriptive text for each nawafil prayer.

use crate::models::NawafilKind;

pub struct Entry {
    pub name: &'static str,
    pub arabic_name: &'static str,
    pub description: &'static str,
    pub rakats: &'static str,
    pub benefits: &'static str,
}

pub const TAHIYYAT_START: &str = "Upon entering mosque";
pub const TAHIYYAT_END: &str = "Before sitting";
pub const TAWBAH_START: &str = "Anytime (except forbidden times)";
pub const TAWBAH_END: &str = "No specific end time";

pub const TITLE: &str = "Nawafil Prayer Times";
pub const TITLE_ARABIC: &str = "صلوات النوافل";

pub const NOTES: &[&str] = &[
    "Avoid praying nawafil during forbidden times (sunrise, sunset, and when sun is at zenith)",
    "Nawafil prayers can be offered individually or in congregation",
    "Each prayer can be performed with different number of rakats as per your capacity",
    "Make dua and dhikr during and after these prayers for maximum benefit",
];

const TAHAJJUD: Entry = Entry {
    name: "Tahajjud",
    arabic_name: "صلاة التهجد",
    description: "The night prayer offered in the last third of the night. It is the most blessed time for supplication and remembrance of Allah.",
    rakats: "2-12 Rakats (minimum 2)",
    benefits: "Spiritual purification, closeness to Allah, and answered prayers",
};

const ISHRAQ: Entry = Entry {
    name: "Ishraq",
    arabic_name: "صلاة الإشراق",
    description: "The sunrise prayer offered 15-20 minutes after sunrise. It brings the reward of a complete Hajj and Umrah.",
    rakats: "2-4 Rakats",
    benefits: "Reward equivalent to Hajj and Umrah, spiritual enlightenment",
};

const DUHA: Entry = Entry {
    name: "Duha (Chasht)",
    arabic_name: "صلاة الضحى",
    description: "The forenoon prayer offered when the sun has risen high. Best time is mid-morning when the sun is at its peak.",
    rakats: "2-8 Rakats (preferably 4)",
    benefits: "Daily sustenance, energy, and barakah in work and life",
};

const AWWABIN: Entry = Entry {
    name: "Awwabin",
    arabic_name: "صلاة الأوابين",
    description: "The prayer of the repentant ones, offered between Maghrib and Isha. Perfect time for seeking forgiveness.",
    rakats: "2-6 Rakats",
    benefits: "Forgiveness of sins, spiritual cleansing, and acceptance of repentance",
};

const TAHIYYAT_AL_MASJID: Entry = Entry {
    name: "Tahiyyat al-Masjid",
    arabic_name: "تحية المسجد",
    description: "The greeting of the mosque prayer, offered immediately upon entering the mosque before sitting down.",
    rakats: "2 Rakats",
    benefits: "Respect for the sacred space, spiritual preparation for worship",
};

const TAWBAH: Entry = Entry {
    name: "Tawbah",
    arabic_name: "صلاة التوبة",
    description: "The prayer of repentance offered when seeking forgiveness from Allah for sins committed.",
    rakats: "2 Rakats",
    benefits: "Forgiveness of sins, spiritual purification, renewed faith",
};

pub fn entry(kind: NawafilKind) -> &'static Entry {
    match kind {
        NawafilKind::Tahajjud => &TAHAJJUD,
        NawafilKind::Ishraq => &ISHRAQ,
        NawafilKind::Duha => &DUHA,
        NawafilKind::Awwabin => &AWWABIN,
        NawafilKind::TahiyyatAlMasjid => &TAHIYYAT_AL_MASJID,
        NawafilKind::Tawbah => &TAWBAH,
    }
}
