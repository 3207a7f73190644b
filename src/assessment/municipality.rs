//! Read-only directory of known Western Balkan municipalities.
//!
//! Reference data only; the engine never mutates it and lookups are safe
//! from any number of concurrent callers.

use serde::Serialize;

use super::domain::ProjectRecord;

/// Static profile of one municipality.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalityProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub region: &'static str,
    pub population: u32,
    /// Area in square kilometres.
    pub area: f64,
    /// GDP per capita, EUR.
    pub gdp_per_capita: u32,
    pub unemployment_rate: f64,
    pub main_sectors: &'static [&'static str],
    /// Broadband coverage, percent of households.
    pub internet_coverage: u8,
    /// 1-10 scale.
    pub energy_efficiency: u8,
    /// 1-10 scale.
    pub transparency_score: u8,
    /// Percent of services available online.
    pub digital_services: u8,
    /// 1-10 scale; drives co-financing and staffing adjustments.
    pub eu_compliance_level: u8,
    pub challenges: &'static [&'static str],
    pub opportunities: &'static [&'static str],
    pub preferred_partners: &'static [&'static str],
    pub strategic_priorities: &'static [&'static str],
}

static DIRECTORY: [MunicipalityProfile; 7] = [
    MunicipalityProfile {
        id: "tirana",
        name: "Tirana",
        country: "Albania",
        region: "Central Albania",
        population: 557_422,
        area: 41.8,
        gdp_per_capita: 7_800,
        unemployment_rate: 12.8,
        main_sectors: &["Services", "Construction", "Manufacturing", "Tourism"],
        internet_coverage: 85,
        energy_efficiency: 5,
        transparency_score: 6,
        digital_services: 45,
        eu_compliance_level: 6,
        challenges: &[
            "Air pollution",
            "Urban sprawl",
            "Traffic congestion",
            "Informal construction",
        ],
        opportunities: &[
            "Smart city development",
            "Green transportation",
            "Digital government",
            "Cultural tourism",
        ],
        preferred_partners: &[
            "Italian municipalities",
            "EU cities network",
            "World Bank",
            "Regional development agencies",
        ],
        strategic_priorities: &[
            "Digital transformation",
            "Green mobility",
            "Urban regeneration",
            "Citizen services",
        ],
    },
    MunicipalityProfile {
        id: "durres",
        name: "Durr\u{eb}s",
        country: "Albania",
        region: "Western Albania",
        population: 175_110,
        area: 338.3,
        gdp_per_capita: 6_200,
        unemployment_rate: 15.2,
        main_sectors: &["Port operations", "Tourism", "Agriculture", "Manufacturing"],
        internet_coverage: 78,
        energy_efficiency: 4,
        transparency_score: 5,
        digital_services: 35,
        eu_compliance_level: 5,
        challenges: &[
            "Coastal erosion",
            "Seasonal unemployment",
            "Water quality",
            "Infrastructure aging",
        ],
        opportunities: &[
            "Port modernization",
            "Beach tourism",
            "Logistics hub",
            "Renewable energy",
        ],
        preferred_partners: &[
            "Italian port cities",
            "Adriatic-Ionian Initiative",
            "EU tourism programs",
        ],
        strategic_priorities: &[
            "Port competitiveness",
            "Sustainable tourism",
            "Coastal management",
            "Youth employment",
        ],
    },
    MunicipalityProfile {
        id: "sarajevo",
        name: "Sarajevo",
        country: "Bosnia and Herzegovina",
        region: "Central Bosnia",
        population: 413_593,
        area: 141.5,
        gdp_per_capita: 6_800,
        unemployment_rate: 18.4,
        main_sectors: &["Public administration", "Manufacturing", "Tourism", "Services"],
        internet_coverage: 82,
        energy_efficiency: 4,
        transparency_score: 5,
        digital_services: 40,
        eu_compliance_level: 5,
        challenges: &[
            "Air pollution",
            "Youth emigration",
            "Administrative complexity",
            "Infrastructure needs",
        ],
        opportunities: &[
            "Cultural tourism",
            "Winter Olympics legacy",
            "Tech sector growth",
            "EU integration",
        ],
        preferred_partners: &[
            "EU municipalities",
            "Olympic cities network",
            "Cultural heritage organizations",
        ],
        strategic_priorities: &[
            "Air quality improvement",
            "Digital economy",
            "Tourism development",
            "Youth retention",
        ],
    },
    MunicipalityProfile {
        id: "podgorica",
        name: "Podgorica",
        country: "Montenegro",
        region: "Central Montenegro",
        population: 185_937,
        area: 1441.0,
        gdp_per_capita: 8_900,
        unemployment_rate: 16.1,
        main_sectors: &["Public administration", "Services", "Manufacturing", "Agriculture"],
        internet_coverage: 88,
        energy_efficiency: 5,
        transparency_score: 6,
        digital_services: 50,
        eu_compliance_level: 7,
        challenges: &[
            "Waste management",
            "Air quality",
            "Urban planning",
            "Public transport efficiency",
        ],
        opportunities: &[
            "Smart city initiatives",
            "Green technology",
            "Regional hub development",
            "EU integration",
        ],
        preferred_partners: &[
            "EU capital cities",
            "Smart city networks",
            "Environmental agencies",
        ],
        strategic_priorities: &[
            "Waste management reform",
            "Smart city development",
            "Air quality",
            "Digital services",
        ],
    },
    MunicipalityProfile {
        id: "belgrade",
        name: "Belgrade",
        country: "Serbia",
        region: "Central Serbia",
        population: 1_344_844,
        area: 3222.0,
        gdp_per_capita: 9_200,
        unemployment_rate: 14.7,
        main_sectors: &["Services", "Manufacturing", "IT", "Tourism"],
        internet_coverage: 92,
        energy_efficiency: 5,
        transparency_score: 5,
        digital_services: 55,
        eu_compliance_level: 6,
        challenges: &[
            "Air pollution",
            "Traffic congestion",
            "River pollution",
            "Administrative efficiency",
        ],
        opportunities: &[
            "Tech hub expansion",
            "Danube corridor development",
            "Cultural tourism",
            "Smart governance",
        ],
        preferred_partners: &["EU capitals", "Danube region cities", "Tech innovation hubs"],
        strategic_priorities: &[
            "Digital transformation",
            "Environmental protection",
            "Innovation ecosystem",
            "Urban mobility",
        ],
    },
    MunicipalityProfile {
        id: "skopje",
        name: "Skopje",
        country: "North Macedonia",
        region: "Central Macedonia",
        population: 526_502,
        area: 1854.0,
        gdp_per_capita: 6_400,
        unemployment_rate: 17.3,
        main_sectors: &["Manufacturing", "Services", "Public administration", "Agriculture"],
        internet_coverage: 79,
        energy_efficiency: 4,
        transparency_score: 5,
        digital_services: 42,
        eu_compliance_level: 6,
        challenges: &[
            "Air pollution",
            "Inter-ethnic integration",
            "Economic development",
            "Infrastructure modernization",
        ],
        opportunities: &[
            "Regional transport hub",
            "Manufacturing growth",
            "Cultural diversity",
            "EU accession momentum",
        ],
        preferred_partners: &[
            "EU municipalities",
            "Regional cooperation initiatives",
            "International development agencies",
        ],
        strategic_priorities: &[
            "Air quality improvement",
            "Economic competitiveness",
            "Social cohesion",
            "EU integration",
        ],
    },
    MunicipalityProfile {
        id: "pristina",
        name: "Pristina",
        country: "Kosovo",
        region: "Central Kosovo",
        population: 198_897,
        area: 854.0,
        gdp_per_capita: 4_200,
        unemployment_rate: 25.9,
        main_sectors: &["Public administration", "Services", "Construction", "Agriculture"],
        internet_coverage: 75,
        energy_efficiency: 3,
        transparency_score: 4,
        digital_services: 30,
        eu_compliance_level: 5,
        challenges: &[
            "Youth unemployment",
            "Energy security",
            "Waste management",
            "Infrastructure development",
        ],
        opportunities: &[
            "Young population",
            "Diaspora connections",
            "EU integration path",
            "Digital economy potential",
        ],
        preferred_partners: &[
            "EU development agencies",
            "Diaspora organizations",
            "International NGOs",
        ],
        strategic_priorities: &[
            "Youth employment",
            "Infrastructure development",
            "Digital skills",
            "European integration",
        ],
    },
];

/// All known municipality profiles.
pub fn all_profiles() -> &'static [MunicipalityProfile] {
    &DIRECTORY
}

/// Lookup by display name; case and any non a-z characters are ignored.
pub fn profile_for(name: &str) -> Option<&'static MunicipalityProfile> {
    let key: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    DIRECTORY.iter().find(|profile| profile.id == key)
}

/// Local-context briefing attached to optimizer output and report text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalityBriefing {
    pub profile_found: bool,
    pub relevant_challenges: Vec<&'static str>,
    pub aligned_opportunities: Vec<&'static str>,
    pub recommended_partners: Vec<&'static str>,
    pub local_context: String,
    pub budget_guidance: String,
}

/// Build a briefing for one draft against a (possibly unknown) municipality.
pub fn briefing(name: &str, record: &ProjectRecord) -> MunicipalityBriefing {
    let Some(profile) = profile_for(name) else {
        return MunicipalityBriefing {
            profile_found: false,
            relevant_challenges: Vec::new(),
            aligned_opportunities: Vec::new(),
            recommended_partners: Vec::new(),
            local_context: "Municipality profile not available in database".to_string(),
            budget_guidance: "Standard EU funding guidelines apply".to_string(),
        };
    };

    let keywords = record.narrative();

    let relevant_challenges = match_first_word(profile.challenges, &keywords);
    let aligned_opportunities = match_first_word(profile.opportunities, &keywords);

    let challenges_line = if relevant_challenges.is_empty() {
        profile.challenges.iter().take(2).copied().collect::<Vec<_>>()
    } else {
        relevant_challenges.clone()
    };
    let opportunities_line = if aligned_opportunities.is_empty() {
        profile
            .opportunities
            .iter()
            .take(2)
            .copied()
            .collect::<Vec<_>>()
    } else {
        aligned_opportunities.clone()
    };

    let local_context = format!(
        "{} ({}) - Population: {}, GDP per capita: \u{20ac}{}\n\
         Key Economic Sectors: {}\n\
         Major Challenges: {}\n\
         Strategic Opportunities: {}\n\
         Infrastructure Level: Internet {}%, Governance Score: {}/10",
        profile.name,
        profile.country,
        profile.population,
        profile.gdp_per_capita,
        profile.main_sectors.join(", "),
        challenges_line.join(", "),
        opportunities_line.join(", "),
        profile.internet_coverage,
        profile.transparency_score,
    );

    let population_category = if profile.population > 500_000 {
        "large"
    } else if profile.population > 100_000 {
        "medium"
    } else {
        "small"
    };
    let economic_level = if profile.gdp_per_capita > 8_000 {
        "high"
    } else if profile.gdp_per_capita > 6_000 {
        "medium"
    } else {
        "developing"
    };
    let co_financing = match economic_level {
        "developing" => "85%",
        "medium" => "75%",
        _ => "65%",
    };
    let typical_range = match population_category {
        "large" => "\u{20ac}2-10M",
        "medium" => "\u{20ac}0.5-5M",
        _ => "\u{20ac}0.2-2M",
    };
    let capacity = if profile.eu_compliance_level >= 6 {
        "Strong"
    } else if profile.eu_compliance_level >= 4 {
        "Moderate"
    } else {
        "Limited"
    };

    let budget_guidance = format!(
        "Municipality Category: {population_category} city, {economic_level} income level\n\
         Recommended EU co-financing: {co_financing}\n\
         Typical project range: {typical_range}\n\
         Local co-financing capacity: {capacity}"
    );

    MunicipalityBriefing {
        profile_found: true,
        relevant_challenges,
        aligned_opportunities,
        recommended_partners: profile.preferred_partners.to_vec(),
        local_context,
        budget_guidance,
    }
}

// Challenges and opportunities are matched on their leading word only; the
// project text rarely repeats the full phrase.
fn match_first_word(entries: &'static [&'static str], keywords: &str) -> Vec<&'static str> {
    entries
        .iter()
        .filter(|entry| {
            entry
                .split_whitespace()
                .next()
                .map(|word| keywords.contains(&word.to_lowercase()))
                .unwrap_or(false)
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert!(profile_for("Tirana").is_some());
        assert!(profile_for("DURRES").is_some());
        assert!(profile_for("  tirana  ").is_some());
        assert!(profile_for("unknown-town").is_none());
    }

    #[test]
    fn directory_values_are_plausible() {
        for profile in all_profiles() {
            assert!(profile.population > 100_000);
            assert!(profile.gdp_per_capita >= 4_000);
            assert!((1..=10).contains(&profile.eu_compliance_level));
        }
    }

    #[test]
    fn briefing_falls_back_for_unknown_municipality() {
        let record = ProjectRecord::default();
        let briefing = briefing("atlantis", &record);
        assert!(!briefing.profile_found);
        assert_eq!(briefing.budget_guidance, "Standard EU funding guidelines apply");
    }

    #[test]
    fn briefing_matches_project_keywords_to_challenges() {
        let record = ProjectRecord {
            title: "Air quality monitoring network".to_string(),
            description: "Reduce air pollution across the city".to_string(),
            ..ProjectRecord::default()
        };
        let briefing = briefing("sarajevo", &record);
        assert!(briefing.profile_found);
        assert!(briefing.relevant_challenges.contains(&"Air pollution"));
    }
}
