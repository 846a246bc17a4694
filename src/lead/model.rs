use serde::{Deserialize, Serialize};

/// Closed fleet-size buckets. Wire strings match the backend enum exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetSize {
    #[serde(rename = "10-20")]
    Small,
    #[serde(rename = "21-50")]
    Medium,
    #[serde(rename = "51-100")]
    Large,
    #[serde(rename = "100+")]
    Enterprise,
}

impl FleetSize {
    pub const ALL: [FleetSize; 4] = [
        FleetSize::Small,
        FleetSize::Medium,
        FleetSize::Large,
        FleetSize::Enterprise,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            FleetSize::Small => "10-20",
            FleetSize::Medium => "21-50",
            FleetSize::Large => "51-100",
            FleetSize::Enterprise => "100+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FleetSize::Small => "10-20 Trucks",
            FleetSize::Medium => "21-50 Trucks",
            FleetSize::Large => "51-100 Trucks",
            FleetSize::Enterprise => "100+ Trucks",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Owner,
    #[serde(rename = "Fleet Manager")]
    FleetManager,
    Operations,
    Finance,
    Other,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Owner,
        Role::FleetManager,
        Role::Operations,
        Role::Finance,
        Role::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::FleetManager => "Fleet Manager",
            Role::Operations => "Operations",
            Role::Finance => "Finance",
            Role::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PainPoint {
    BrokerFraud,
    Insurance,
    Downtime,
    FuelTheft,
    Other,
}

impl PainPoint {
    pub const ALL: [PainPoint; 5] = [
        PainPoint::BrokerFraud,
        PainPoint::Insurance,
        PainPoint::Downtime,
        PainPoint::FuelTheft,
        PainPoint::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            PainPoint::BrokerFraud => "Broker Fraud / Double Brokering",
            PainPoint::Insurance => "Insurance Premium Spikes",
            PainPoint::Downtime => "Unplanned Breakdowns / Downtime",
            PainPoint::FuelTheft => "Fuel Theft / High Fuel Costs",
            PainPoint::Other => "Other / Not Sure",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.value() == value)
    }
}

/// Coarse classification returned by the backend's public-data analysis.
/// Consumed as an opaque value; absence means the carrier is unrated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// Read-only result of the preview lookup. Never mutated after fetch.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RiskData {
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub risk_flags: Vec<String>,
    #[serde(default)]
    pub vehicle_oos_rate: f64,
    #[serde(default)]
    pub driver_oos_rate: f64,
    #[serde(default, alias = "rating")]
    pub safety_rating: Option<String>,
    #[serde(default)]
    pub total_crashes: u32,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub dot_number: Option<String>,
    #[serde(default)]
    pub fleet_size: Option<u32>,
}

/// The single mutable record the wizard builds across stages. Draft-only
/// fields are skipped on the wire; `pain_points` is composed right before
/// submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadRecord {
    pub full_name: String,
    pub work_email: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dot_number: String,
    pub fleet_size: Option<FleetSize>,
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain_points: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tech_stack: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    pub landing_page_path: String,
    pub consent_audit: bool,
    #[serde(skip)]
    pub pain_point: Option<PainPoint>,
    #[serde(skip)]
    pub pain_detail: String,
}

impl Default for LeadRecord {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            work_email: String::new(),
            company_name: String::new(),
            phone: String::new(),
            dot_number: String::new(),
            fleet_size: None,
            role: None,
            pain_points: None,
            tech_stack: String::new(),
            source: "direct".to_string(),
            utm_campaign: None,
            landing_page_path: "/".to_string(),
            consent_audit: true,
            pain_point: None,
            pain_detail: String::new(),
        }
    }
}

impl LeadRecord {
    /// Required-field guard for leaving the results stage. A work email only
    /// has to look like an email here; the backend does real validation.
    pub fn contact_fields_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.work_email.trim().is_empty()
            && self.work_email.contains('@')
            && self.fleet_size.is_some()
            && self.role.is_some()
    }
}

/// Builds the pain-points string sent to the backend: the user's own words
/// first, then the machine-generated risk summary when a lookup happened.
pub fn compose_pain_points(record: &LeadRecord, risk: Option<&RiskData>) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(p) = record.pain_point {
        parts.push(p.value().to_string());
    }
    let detail = record.pain_detail.trim();
    if !detail.is_empty() {
        parts.push(detail.to_string());
    }
    if let Some(risk) = risk {
        let level = risk.risk_level.map(|l| l.as_str()).unwrap_or("UNRATED");
        parts.push(format!(
            "Auto-Audit Risk: {} | Flags: {}",
            level,
            risk.risk_flags.join(", ")
        ));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

/// Which story the results stage tells. Pure function of the risk level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Narrative {
    ElevatedRisk,
    HiddenLeakage,
}

pub fn narrative_for(level: Option<RiskLevel>) -> Narrative {
    match level {
        Some(RiskLevel::High) | Some(RiskLevel::Critical) => Narrative::ElevatedRisk,
        Some(RiskLevel::Low) | None => Narrative::HiddenLeakage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enum_wire_strings_match_backend() {
        assert_eq!(
            serde_json::to_value(FleetSize::Medium).unwrap(),
            json!("21-50")
        );
        assert_eq!(
            serde_json::to_value(FleetSize::Enterprise).unwrap(),
            json!("100+")
        );
        assert_eq!(
            serde_json::to_value(Role::FleetManager).unwrap(),
            json!("Fleet Manager")
        );
        assert_eq!(serde_json::to_value(Role::Owner).unwrap(), json!("Owner"));
    }

    #[test]
    fn select_values_round_trip() {
        for size in FleetSize::ALL {
            assert_eq!(FleetSize::from_value(size.value()), Some(size));
        }
        for role in Role::ALL {
            assert_eq!(Role::from_value(role.value()), Some(role));
        }
        assert_eq!(FleetSize::from_value(""), None);
        assert_eq!(Role::from_value("CEO"), None);
    }

    #[test]
    fn risk_data_parses_backend_preview_body() {
        let body = json!({
            "company_name": "Acme Trucking",
            "vehicle_oos_rate": 31.5,
            "driver_oos_rate": 4.2,
            "rating": "Conditional",
            "risk_level": "CRITICAL",
            "risk_flags": ["Safety Rating is CONDITIONAL (Insurance Risk)"],
            "total_crashes": 3,
            "fleet_size": 45
        });
        let risk: RiskData = serde_json::from_value(body).unwrap();
        assert_eq!(risk.risk_level, Some(RiskLevel::Critical));
        assert_eq!(risk.safety_rating.as_deref(), Some("Conditional"));
        assert_eq!(risk.total_crashes, 3);
        assert_eq!(risk.fleet_size, Some(45));
    }

    #[test]
    fn risk_data_tolerates_sparse_bodies() {
        let risk: RiskData = serde_json::from_value(json!({})).unwrap();
        assert_eq!(risk.risk_level, None);
        assert!(risk.risk_flags.is_empty());
        assert_eq!(risk.fleet_size, None);
    }

    #[test]
    fn composed_pain_points_end_with_risk_summary() {
        let mut record = LeadRecord::default();
        record.pain_detail = "Fuel cards don't match GPS".to_string();
        let risk = RiskData {
            risk_level: Some(RiskLevel::High),
            risk_flags: vec!["Vehicle OOS is 31.5% (Natl Avg: 22%)".to_string(),
                             "3 Reportable Crashes (Potential Ghost Downtime)".to_string()],
            vehicle_oos_rate: 31.5,
            driver_oos_rate: 4.2,
            safety_rating: None,
            total_crashes: 3,
            company_name: None,
            dot_number: None,
            fleet_size: None,
        };
        let composed = compose_pain_points(&record, Some(&risk)).unwrap();
        assert!(composed.starts_with("Fuel cards don't match GPS"));
        assert!(composed.ends_with(
            "Auto-Audit Risk: HIGH | Flags: Vehicle OOS is 31.5% (Natl Avg: 22%), \
             3 Reportable Crashes (Potential Ghost Downtime)"
        ));
    }

    #[test]
    fn composed_pain_points_without_lookup_omit_summary() {
        let mut record = LeadRecord::default();
        record.pain_point = Some(PainPoint::FuelTheft);
        let composed = compose_pain_points(&record, None).unwrap();
        assert_eq!(composed, "Fuel Theft / High Fuel Costs");
        assert_eq!(compose_pain_points(&LeadRecord::default(), None), None);
    }

    #[test]
    fn narrative_branches_on_risk_level() {
        assert_eq!(narrative_for(Some(RiskLevel::High)), Narrative::ElevatedRisk);
        assert_eq!(
            narrative_for(Some(RiskLevel::Critical)),
            Narrative::ElevatedRisk
        );
        assert_eq!(narrative_for(Some(RiskLevel::Low)), Narrative::HiddenLeakage);
        assert_eq!(narrative_for(None), Narrative::HiddenLeakage);
    }

    #[test]
    fn payload_skips_empty_optionals_and_keeps_consent_default() {
        let record = LeadRecord::default();
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("phone"));
        assert!(!obj.contains_key("dot_number"));
        assert!(!obj.contains_key("pain_points"));
        assert_eq!(obj["consent_audit"], json!(true));
        assert_eq!(obj["source"], json!("direct"));
        assert_eq!(obj["landing_page_path"], json!("/"));
    }
}
