//! Deterministic fixture data for learnpath tests and benchmarks.
//!
//! Generates NSQF-style vocational course corpora and sample pathway
//! requests. Everything is seeded, so fixtures are reproducible across
//! crates without golden files on disk.

use std::path::Path;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use learnpath_core::models::{CourseRecord, PathwayRequest, UserProfile};

const INDUSTRY_SECTORS: [&str; 8] = [
    "IT-ITeS",
    "Automotive",
    "Healthcare",
    "Construction",
    "Agriculture",
    "Retail",
    "Electronics",
    "Green Jobs",
];

const REGIONS: [&str; 4] = ["North", "South", "East", "West"];

/// Skill pools per sector. Sectors without a pool fall back to
/// "Communication", matching the shape of public NSQF course listings.
fn sector_skills(sector: &str) -> &'static [&'static str] {
    match sector {
        "IT-ITeS" => &[
            "Python",
            "Java",
            "Data Entry",
            "Cybersecurity",
            "Cloud Computing",
            "Web Design",
        ],
        "Automotive" => &[
            "Engine Repair",
            "Vehicle Diagnostics",
            "Welding",
            "Painting",
            "EV Maintenance",
        ],
        "Healthcare" => &[
            "General Duty Assistant",
            "Phlebotomy",
            "Emergency Medical Technician",
            "Patient Care",
        ],
        "Electronics" => &[
            "PCB Assembly",
            "Mobile Repair",
            "Solar Panel Installation",
            "IoT Devices",
        ],
        "Green Jobs" => &[
            "Solar Installation",
            "Waste Management",
            "Water Treatment",
            "EV Charging Station Mgr",
        ],
        _ => &["Communication"],
    }
}

/// Generate a seeded corpus of mock vocational courses.
///
/// Levels span the common vocational band (NSQF 3-7), durations scale
/// with level, and each course carries its sector plus two generic
/// workplace skills.
pub fn course_corpus(count: usize, seed: u64) -> Vec<CourseRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let sector = INDUSTRY_SECTORS[rng.gen_range(0..INDUSTRY_SECTORS.len())];
            let level = rng.gen_range(3..=7u8);
            let pool = sector_skills(sector);
            let main_skill = pool[rng.gen_range(0..pool.len())];
            let region = REGIONS[rng.gen_range(0..REGIONS.len())];

            CourseRecord {
                id: format!("C-{}", 1000 + i),
                title: format!("{main_skill} Specialist - NSQF Level {level}"),
                sector: sector.to_string(),
                nsqf_level: level,
                description: format!(
                    "A comprehensive {}-hour course covering {main_skill} and industry \
                     safety standards. Certified by Sector Skill Council.",
                    u32::from(level) * 50
                ),
                skills: format!("{main_skill}, {sector}, Safety, Teamwork"),
                duration_hours: u32::from(level) * 50,
                provider: format!("National Skill Training Institute - {region}"),
            }
        })
        .collect()
}

/// Write a seeded corpus to a JSON file.
///
/// # Panics
/// Panics on IO or serialization failure; fixtures are test-only.
pub fn write_corpus(path: &Path, count: usize, seed: u64) {
    let corpus = course_corpus(count, seed);
    let raw = serde_json::to_string_pretty(&corpus)
        .unwrap_or_else(|e| panic!("failed to serialize fixture corpus: {e}"));
    std::fs::write(path, raw)
        .unwrap_or_else(|e| panic!("failed to write fixture corpus to {}: {e}", path.display()));
}

/// A representative pathway request: a learner with some Python and
/// spreadsheet experience aiming at data analysis.
pub fn sample_request() -> PathwayRequest {
    PathwayRequest {
        user_profile: UserProfile {
            avg_score: Some(serde_json::json!(0.55)),
            experience_years: Some(serde_json::json!(1.0)),
            bio: Some("Completed an introductory Python and statistics course".to_string()),
            projects: Some(serde_json::json!([
                "Sales dashboard in Excel",
                "SQL reporting pipeline"
            ])),
        },
        current_skills: vec![
            "Python".to_string(),
            "SQL".to_string(),
            "Excel".to_string(),
        ],
        career_aspiration: "Data Analyst".to_string(),
    }
}

/// A request with everything missing, for default-path coverage.
pub fn empty_request() -> PathwayRequest {
    PathwayRequest {
        user_profile: UserProfile {
            avg_score: None,
            experience_years: None,
            bio: None,
            projects: None,
        },
        current_skills: Vec::new(),
        career_aspiration: String::new(),
    }
}
