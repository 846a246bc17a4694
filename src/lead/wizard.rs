use crate::lead::api::SubmitOutcome;
use crate::lead::model::{
    compose_pain_points, FleetSize, LeadRecord, PainPoint, RiskData, Role,
};

/// Fleets below this many power units route to the waitlist branch instead of
/// the results stage.
pub const WAITLIST_FLEET_CUTOFF: u32 = 20;

pub const DOT_NOT_FOUND_ALERT: &str =
    "DOT number not found. Please check it and try again.";
pub const FILL_IN_FIELDS_MESSAGE: &str =
    "Please fill in your name, work email, fleet size and role.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Input,
    Analyzing,
    Results,
    Qualification,
    Submitting,
    Success,
    Waitlist,
}

/// Tagged field edit. Every input in the form funnels through `apply_edit`,
/// so the record is the single source of truth across stages.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit {
    DotNumber(String),
    FullName(String),
    WorkEmail(String),
    CompanyName(String),
    Phone(String),
    FleetSize(Option<FleetSize>),
    Role(Option<Role>),
    PainPoint(Option<PainPoint>),
    PainDetail(String),
    TechStack(String),
    ConsentAudit(bool),
}

/// The wizard's whole session state. No Yew types in here: the component
/// holds one of these in a `use_state` and swaps in updated copies, which
/// keeps every transition testable off the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    pub stage: Stage,
    pub record: LeadRecord,
    pub risk: Option<RiskData>,
    pub alert: Option<String>,
    pub form_error: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            stage: Stage::Input,
            record: LeadRecord::default(),
            risk: None,
            alert: None,
            form_error: None,
        }
    }

    /// Last-write-wins; edits never touch unrelated fields or the stage.
    pub fn apply_edit(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::DotNumber(v) => self.record.dot_number = v,
            FieldEdit::FullName(v) => self.record.full_name = v,
            FieldEdit::WorkEmail(v) => self.record.work_email = v,
            FieldEdit::CompanyName(v) => self.record.company_name = v,
            FieldEdit::Phone(v) => self.record.phone = v,
            FieldEdit::FleetSize(v) => self.record.fleet_size = v,
            FieldEdit::Role(v) => self.record.role = v,
            FieldEdit::PainPoint(v) => self.record.pain_point = v,
            FieldEdit::PainDetail(v) => self.record.pain_detail = v,
            FieldEdit::TechStack(v) => self.record.tech_stack = v,
            FieldEdit::ConsentAudit(v) => self.record.consent_audit = v,
        }
    }

    pub fn set_provenance(&mut self, source: Option<String>, campaign: Option<String>, path: String) {
        if let Some(source) = source {
            self.record.source = source;
        }
        self.record.utm_campaign = campaign;
        self.record.landing_page_path = path;
    }

    /// `Input -> Analyzing`, refused without a DOT number. Returns whether
    /// the caller should issue the lookup.
    pub fn begin_lookup(&mut self) -> bool {
        if self.stage != Stage::Input || self.record.dot_number.trim().is_empty() {
            return false;
        }
        self.alert = None;
        self.stage = Stage::Analyzing;
        true
    }

    /// Resolution of the lookup: data routes to results or the waitlist
    /// (small-fleet disqualification), no data falls back to the input stage
    /// with an alert. The identifier field is retained for correction.
    pub fn lookup_resolved(&mut self, result: Option<RiskData>) {
        if self.stage != Stage::Analyzing {
            return;
        }
        match result {
            Some(risk) => {
                if risk.fleet_size.map_or(false, |n| n < WAITLIST_FLEET_CUTOFF) {
                    self.risk = Some(risk);
                    self.stage = Stage::Waitlist;
                    return;
                }
                if let Some(name) = risk.company_name.as_deref() {
                    self.record.company_name = name.to_string();
                }
                self.risk = Some(risk);
                self.stage = Stage::Results;
            }
            None => {
                self.alert = Some(DOT_NOT_FOUND_ALERT.to_string());
                self.stage = Stage::Input;
            }
        }
    }

    /// `Results -> Qualification`, guarded on the required contact fields.
    pub fn advance_to_qualification(&mut self) -> bool {
        if self.stage != Stage::Results {
            return false;
        }
        if !self.record.contact_fields_complete() {
            self.form_error = Some(FILL_IN_FIELDS_MESSAGE.to_string());
            return false;
        }
        self.form_error = None;
        self.stage = Stage::Qualification;
        true
    }

    /// Manual back-navigation. Fields live in the shared record, so nothing
    /// is discarded.
    pub fn back_to_results(&mut self) {
        if self.stage == Stage::Qualification {
            self.form_error = None;
            self.stage = Stage::Results;
        }
    }

    /// `Qualification -> Submitting`. Enriches the record with the composed
    /// pain-points string and hands back the payload to POST, exactly once
    /// per entry into the submitting stage.
    pub fn begin_submit(&mut self) -> Option<LeadRecord> {
        if self.stage != Stage::Qualification {
            return None;
        }
        self.form_error = None;
        self.record.pain_points = compose_pain_points(&self.record, self.risk.as_ref());
        self.stage = Stage::Submitting;
        Some(self.record.clone())
    }

    /// Submit failures surface inline and drop back to the qualification
    /// stage so the user can retry manually. Nothing is retried for them.
    pub fn submit_resolved(&mut self, outcome: SubmitOutcome) {
        if self.stage != Stage::Submitting {
            return;
        }
        if outcome.success {
            self.stage = Stage::Success;
        } else {
            self.form_error = outcome.error;
            self.stage = Stage::Qualification;
        }
    }

    /// `Waitlist -> Input`: everything the user typed persists except the DOT
    /// number. This goes one step past the clear-only-the-identifier
    /// transition contract: the fetched risk is dropped too, since it was
    /// derived from the cleared DOT and must not survive into a submit for a
    /// different fleet.
    pub fn restart_from_waitlist(&mut self) {
        if self.stage == Stage::Waitlist {
            self.record.dot_number.clear();
            self.risk = None;
            self.stage = Stage::Input;
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn dismiss_form_error(&mut self) {
        self.form_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::api::SubmitOutcome;
    use crate::lead::model::RiskLevel;

    fn risk(level: Option<RiskLevel>, fleet_size: Option<u32>, company: &str) -> RiskData {
        RiskData {
            risk_level: level,
            risk_flags: vec!["Vehicle OOS is 31.5% (Natl Avg: 22%)".to_string()],
            vehicle_oos_rate: 31.5,
            driver_oos_rate: 4.2,
            safety_rating: Some("Satisfactory".to_string()),
            total_crashes: 2,
            company_name: Some(company.to_string()),
            dot_number: None,
            fleet_size,
        }
    }

    fn wizard_at_results() -> Wizard {
        let mut w = Wizard::new();
        w.apply_edit(FieldEdit::DotNumber("1234567".to_string()));
        assert!(w.begin_lookup());
        w.lookup_resolved(Some(risk(Some(RiskLevel::Low), Some(45), "Acme Trucking")));
        assert_eq!(w.stage, Stage::Results);
        w
    }

    #[test]
    fn field_edits_are_last_write_wins() {
        let mut w = Wizard::new();
        w.apply_edit(FieldEdit::FullName("A".to_string()));
        w.apply_edit(FieldEdit::WorkEmail("a@b.com".to_string()));
        w.apply_edit(FieldEdit::FullName("Mike Torres".to_string()));
        w.apply_edit(FieldEdit::FleetSize(Some(FleetSize::Medium)));
        w.apply_edit(FieldEdit::Role(Some(Role::Owner)));
        w.apply_edit(FieldEdit::Role(Some(Role::Finance)));
        assert_eq!(w.record.full_name, "Mike Torres");
        assert_eq!(w.record.work_email, "a@b.com");
        assert_eq!(w.record.fleet_size, Some(FleetSize::Medium));
        assert_eq!(w.record.role, Some(Role::Finance));
        assert_eq!(w.stage, Stage::Input);
    }

    #[test]
    fn lookup_refused_without_dot_number() {
        let mut w = Wizard::new();
        assert!(!w.begin_lookup());
        assert_eq!(w.stage, Stage::Input);
        w.apply_edit(FieldEdit::DotNumber("   ".to_string()));
        assert!(!w.begin_lookup());
        assert_eq!(w.stage, Stage::Input);
    }

    #[test]
    fn unknown_dot_returns_to_input_with_alert_and_keeps_identifier() {
        let mut w = Wizard::new();
        w.apply_edit(FieldEdit::DotNumber("0000000".to_string()));
        assert!(w.begin_lookup());
        assert_eq!(w.stage, Stage::Analyzing);
        w.lookup_resolved(None);
        assert_eq!(w.stage, Stage::Input);
        assert_eq!(w.alert.as_deref(), Some(DOT_NOT_FOUND_ALERT));
        assert_eq!(w.record.dot_number, "0000000");
        assert!(w.risk.is_none());
    }

    #[test]
    fn small_fleet_routes_to_waitlist_regardless_of_risk_level() {
        for level in [Some(RiskLevel::Critical), Some(RiskLevel::Low), None] {
            let mut w = Wizard::new();
            w.apply_edit(FieldEdit::DotNumber("7654321".to_string()));
            assert!(w.begin_lookup());
            w.lookup_resolved(Some(risk(level, Some(12), "Tiny Haulers")));
            assert_eq!(w.stage, Stage::Waitlist);
        }
    }

    #[test]
    fn qualified_fleet_routes_to_results() {
        for fleet_size in [Some(20), Some(45), None] {
            let mut w = Wizard::new();
            w.apply_edit(FieldEdit::DotNumber("1234567".to_string()));
            assert!(w.begin_lookup());
            w.lookup_resolved(Some(risk(Some(RiskLevel::High), fleet_size, "Acme Trucking")));
            assert_eq!(w.stage, Stage::Results);
        }
    }

    #[test]
    fn results_entry_autofills_company_name_from_lookup() {
        let w = wizard_at_results();
        assert_eq!(w.record.company_name, "Acme Trucking");
    }

    #[test]
    fn qualification_guard_blocks_on_each_missing_field() {
        let complete = |w: &mut Wizard| {
            w.apply_edit(FieldEdit::FullName("Mike Torres".to_string()));
            w.apply_edit(FieldEdit::WorkEmail("mike@acme.com".to_string()));
            w.apply_edit(FieldEdit::FleetSize(Some(FleetSize::Medium)));
            w.apply_edit(FieldEdit::Role(Some(Role::Owner)));
        };
        let gaps: [FieldEdit; 5] = [
            FieldEdit::FullName(String::new()),
            FieldEdit::WorkEmail(String::new()),
            FieldEdit::WorkEmail("not-an-email".to_string()),
            FieldEdit::FleetSize(None),
            FieldEdit::Role(None),
        ];
        for gap in gaps {
            let mut w = wizard_at_results();
            complete(&mut w);
            w.apply_edit(gap);
            assert!(!w.advance_to_qualification());
            assert_eq!(w.stage, Stage::Results);
            assert_eq!(w.form_error.as_deref(), Some(FILL_IN_FIELDS_MESSAGE));
        }
        let mut w = wizard_at_results();
        complete(&mut w);
        assert!(w.advance_to_qualification());
        assert_eq!(w.stage, Stage::Qualification);
        assert!(w.form_error.is_none());
    }

    #[test]
    fn back_navigation_keeps_every_field() {
        let mut w = wizard_at_results();
        w.apply_edit(FieldEdit::FullName("Mike Torres".to_string()));
        w.apply_edit(FieldEdit::WorkEmail("mike@acme.com".to_string()));
        w.apply_edit(FieldEdit::FleetSize(Some(FleetSize::Medium)));
        w.apply_edit(FieldEdit::Role(Some(Role::Owner)));
        assert!(w.advance_to_qualification());
        w.apply_edit(FieldEdit::TechStack("Samsara + WEX".to_string()));
        w.back_to_results();
        assert_eq!(w.stage, Stage::Results);
        assert_eq!(w.record.tech_stack, "Samsara + WEX");
        assert_eq!(w.record.full_name, "Mike Torres");
    }

    #[test]
    fn submit_payload_carries_composed_pain_points() {
        let mut w = wizard_at_results();
        w.apply_edit(FieldEdit::FullName("Mike Torres".to_string()));
        w.apply_edit(FieldEdit::WorkEmail("mike@acme.com".to_string()));
        w.apply_edit(FieldEdit::FleetSize(Some(FleetSize::Medium)));
        w.apply_edit(FieldEdit::Role(Some(Role::Owner)));
        assert!(w.advance_to_qualification());
        w.apply_edit(FieldEdit::PainDetail("Fuel numbers never add up".to_string()));
        let payload = w.begin_submit().unwrap();
        assert_eq!(w.stage, Stage::Submitting);
        let pain = payload.pain_points.unwrap();
        assert!(pain.starts_with("Fuel numbers never add up"));
        assert!(pain.contains("Auto-Audit Risk: LOW | Flags: "));
    }

    #[test]
    fn submit_outcome_drives_success_or_inline_retry() {
        let mut w = wizard_at_results();
        w.apply_edit(FieldEdit::FullName("Mike Torres".to_string()));
        w.apply_edit(FieldEdit::WorkEmail("mike@acme.com".to_string()));
        w.apply_edit(FieldEdit::FleetSize(Some(FleetSize::Medium)));
        w.apply_edit(FieldEdit::Role(Some(Role::Owner)));
        assert!(w.advance_to_qualification());
        assert!(w.begin_submit().is_some());
        w.submit_resolved(SubmitOutcome::failure("Too many submissions."));
        assert_eq!(w.stage, Stage::Qualification);
        assert_eq!(w.form_error.as_deref(), Some("Too many submissions."));
        assert_eq!(w.record.full_name, "Mike Torres");

        assert!(w.begin_submit().is_some());
        w.submit_resolved(SubmitOutcome::ok());
        assert_eq!(w.stage, Stage::Success);
    }

    #[test]
    fn begin_submit_refused_outside_qualification() {
        let mut w = wizard_at_results();
        assert!(w.begin_submit().is_none());
        assert_eq!(w.stage, Stage::Results);
    }

    #[test]
    fn waitlist_restart_clears_only_the_identifier() {
        let mut w = Wizard::new();
        w.apply_edit(FieldEdit::FullName("Sam Lee".to_string()));
        w.apply_edit(FieldEdit::DotNumber("7654321".to_string()));
        assert!(w.begin_lookup());
        w.lookup_resolved(Some(risk(None, Some(8), "Tiny Haulers")));
        assert_eq!(w.stage, Stage::Waitlist);
        w.restart_from_waitlist();
        assert_eq!(w.stage, Stage::Input);
        assert!(w.record.dot_number.is_empty());
        assert!(w.risk.is_none());
        assert_eq!(w.record.full_name, "Sam Lee");
    }

    #[test]
    fn provenance_defaults_to_direct_without_source() {
        let mut w = Wizard::new();
        w.set_provenance(None, Some("q3-audit-push".to_string()), "/lp/fuel".to_string());
        assert_eq!(w.record.source, "direct");
        assert_eq!(w.record.utm_campaign.as_deref(), Some("q3-audit-push"));
        assert_eq!(w.record.landing_page_path, "/lp/fuel");
    }

    #[test]
    fn fresh_session_after_success_keeps_reapplied_provenance() {
        let mut w = Wizard::new();
        w.set_provenance(Some("fb".to_string()), Some("q3-audit-push".to_string()), "/".to_string());
        w.apply_edit(FieldEdit::DotNumber("1234567".to_string()));
        assert!(w.begin_lookup());
        w.lookup_resolved(Some(risk(Some(RiskLevel::Low), Some(45), "Acme Trucking")));
        w.apply_edit(FieldEdit::FullName("Mike Torres".to_string()));
        w.apply_edit(FieldEdit::WorkEmail("mike@acme.com".to_string()));
        w.apply_edit(FieldEdit::FleetSize(Some(FleetSize::Medium)));
        w.apply_edit(FieldEdit::Role(Some(Role::Owner)));
        assert!(w.advance_to_qualification());
        assert!(w.begin_submit().is_some());
        w.submit_resolved(SubmitOutcome::ok());
        assert_eq!(w.stage, Stage::Success);

        // Restart discards the record but not how the session arrived.
        let mut fresh = Wizard::new();
        fresh.set_provenance(Some("fb".to_string()), Some("q3-audit-push".to_string()), "/".to_string());
        assert_eq!(fresh.stage, Stage::Input);
        assert!(fresh.record.full_name.is_empty());
        assert_eq!(fresh.record.source, "fb");
        assert_eq!(fresh.record.utm_campaign.as_deref(), Some("q3-audit-push"));
    }

    #[test]
    fn acme_scenario_reaches_results_with_low_risk_narrative() {
        use crate::lead::model::{narrative_for, Narrative};
        let w = wizard_at_results();
        assert_eq!(w.record.company_name, "Acme Trucking");
        let level = w.risk.as_ref().unwrap().risk_level;
        assert_eq!(narrative_for(level), Narrative::HiddenLeakage);
    }
}
