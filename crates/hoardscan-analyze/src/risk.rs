//! The final risk classifier.
//!
//! A pure function of two small integers: system points from the scan
//! (0-4) and the quiz total (0-20). The threshold bands are fixed
//! heuristic constants and deliberately not configurable.

use serde::{Deserialize, Serialize};

/// System-behavior risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemRisk {
    Normal,
    Borderline,
    Severe,
}

impl SystemRisk {
    /// Band for a system point total.
    pub fn from_points(points: u8) -> Self {
        match points {
            0 | 1 => Self::Normal,
            2 => Self::Borderline,
            _ => Self::Severe,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Borderline => "Borderline",
            Self::Severe => "Severe",
        }
    }
}

/// Psychological (self-report) risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PsychRisk {
    Low,
    Medium,
    High,
}

impl PsychRisk {
    /// Band for a quiz total.
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=5 => Self::Low,
            6..=12 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Emotional Hoarding",
            Self::Medium => "Medium Emotional Hoarding",
            Self::High => "High Emotional Hoarding",
        }
    }
}

/// Combined risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallRisk {
    NormalUser,
    Borderline,
    Severe,
}

impl OverallRisk {
    fn combine(system: SystemRisk, psych: PsychRisk) -> Self {
        if system == SystemRisk::Severe || psych == PsychRisk::High {
            Self::Severe
        } else if system == SystemRisk::Borderline || psych == PsychRisk::Medium {
            Self::Borderline
        } else {
            Self::NormalUser
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NormalUser => "Normal User",
            Self::Borderline => "Borderline Digital Hoarder",
            Self::Severe => "Severe Digital Hoarder",
        }
    }

    /// Canned advice text for this band.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::NormalUser => {
                "You have healthy digital habits. Keep organizing your files regularly!"
            }
            Self::Borderline => {
                "You are starting to accumulate too many files.\n\
                 - Clean up old files.\n\
                 - Organize folders.\n\
                 - Delete unused apps.\n\
                 - Backup important data."
            }
            Self::Severe => {
                "Severe Digital Hoarding Detected!\n\
                 - Immediately delete duplicates.\n\
                 - Uninstall unused applications.\n\
                 - Backup and organize data.\n\
                 - Use tools like CCleaner, Gemini, fdupes.\n\
                 - Consider a fresh system reinstall if performance is very poor."
            }
        }
    }
}

/// Full classification of one run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// System points the assessment was derived from.
    pub system_points: u8,
    /// Quiz total the assessment was derived from.
    pub quiz_total: u8,
    /// System-behavior band.
    pub system: SystemRisk,
    /// Self-report band.
    pub psych: PsychRisk,
    /// Combined band.
    pub overall: OverallRisk,
}

/// Classify one run. Pure; no side effects.
pub fn classify(system_points: u8, quiz_total: u8) -> RiskAssessment {
    let system = SystemRisk::from_points(system_points);
    let psych = PsychRisk::from_total(quiz_total);
    RiskAssessment {
        system_points,
        quiz_total,
        system,
        psych,
        overall: OverallRisk::combine(system, psych),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_bands() {
        assert_eq!(SystemRisk::from_points(0), SystemRisk::Normal);
        assert_eq!(SystemRisk::from_points(1), SystemRisk::Normal);
        assert_eq!(SystemRisk::from_points(2), SystemRisk::Borderline);
        assert_eq!(SystemRisk::from_points(3), SystemRisk::Severe);
        assert_eq!(SystemRisk::from_points(4), SystemRisk::Severe);
    }

    #[test]
    fn test_psych_band_edges() {
        assert_eq!(PsychRisk::from_total(0), PsychRisk::Low);
        assert_eq!(PsychRisk::from_total(5), PsychRisk::Low);
        assert_eq!(PsychRisk::from_total(6), PsychRisk::Medium);
        assert_eq!(PsychRisk::from_total(12), PsychRisk::Medium);
        assert_eq!(PsychRisk::from_total(13), PsychRisk::High);
        assert_eq!(PsychRisk::from_total(20), PsychRisk::High);
    }

    #[test]
    fn test_severe_system_dominates() {
        let assessment = classify(3, 0);
        assert_eq!(assessment.system, SystemRisk::Severe);
        assert_eq!(assessment.psych, PsychRisk::Low);
        assert_eq!(assessment.overall.label(), "Severe Digital Hoarder");
    }

    #[test]
    fn test_normal_user() {
        let assessment = classify(0, 5);
        assert_eq!(assessment.system, SystemRisk::Normal);
        assert_eq!(assessment.psych, PsychRisk::Low);
        assert_eq!(assessment.overall.label(), "Normal User");
    }

    #[test]
    fn test_high_psych_dominates() {
        let assessment = classify(0, 13);
        assert_eq!(assessment.overall, OverallRisk::Severe);
    }

    #[test]
    fn test_either_medium_means_borderline() {
        assert_eq!(classify(2, 0).overall, OverallRisk::Borderline);
        assert_eq!(classify(0, 6).overall, OverallRisk::Borderline);
        assert_eq!(classify(1, 12).overall, OverallRisk::Borderline);
    }

    #[test]
    fn test_severe_advice_names_cleanup_tools() {
        let advice = OverallRisk::Severe.advice();
        assert!(advice.starts_with("Severe Digital Hoarding Detected!"));
        assert!(advice.contains("CCleaner, Gemini, fdupes"));
    }

    #[test]
    fn test_pure_function_is_stable() {
        for points in 0..=4 {
            for total in 0..=20 {
                let a = classify(points, total);
                let b = classify(points, total);
                assert_eq!(a.overall, b.overall);
                assert_eq!(a.system, b.system);
                assert_eq!(a.psych, b.psych);
            }
        }
    }
}
