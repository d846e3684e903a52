//! Form state and the choice enums collected on step 1.

use serde::{Deserialize, Serialize};

use super::format::{compose_phone, format_currency, stamp_timestamp, strip_separators};

/// Maximum length of the area-code segment.
pub const PHONE_AREA_MAX: usize = 3;
/// Maximum length of the exchange-prefix segment.
pub const PHONE_PREFIX_MAX: usize = 3;
/// Maximum length of the line-number segment.
pub const PHONE_LINE_MAX: usize = 4;

/// Wire names of the transmitted fields, in submission order.
pub mod field_names {
    pub const HOMEOWNER_ONTARIO: &str = "homeowner_ontario";
    pub const NEED_HELP: &str = "need_help";
    pub const AMOUNT: &str = "amount";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const SUBMITTED_VIA: &str = "submitted_via";
    pub const TIMESTAMP: &str = "timestamp";
}

/// Answer to "Are you a homeowner in Ontario?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeownerAnswer {
    Yes,
    No,
}

impl HomeownerAnswer {
    /// Value transmitted for this answer.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl std::fmt::Display for HomeownerAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

impl std::str::FromStr for HomeownerAnswer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            other => Err(format!("Unknown homeowner answer: {other}")),
        }
    }
}

/// What the lead needs help with most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeedCategory {
    #[serde(rename = "Consolidate Debt")]
    ConsolidateDebt,
    #[serde(rename = "Home Equity Line of Credit")]
    HomeEquityLineOfCredit,
    #[serde(rename = "Home Equity Loan")]
    HomeEquityLoan,
    Refinance,
    Renewal,
    #[serde(rename = "Reverse Mortgage")]
    ReverseMortgage,
}

impl NeedCategory {
    /// All categories, in the order they are offered.
    pub const ALL: [NeedCategory; 6] = [
        Self::ConsolidateDebt,
        Self::HomeEquityLineOfCredit,
        Self::HomeEquityLoan,
        Self::Refinance,
        Self::Renewal,
        Self::ReverseMortgage,
    ];

    /// Value transmitted for this category.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::ConsolidateDebt => "Consolidate Debt",
            Self::HomeEquityLineOfCredit => "Home Equity Line of Credit",
            Self::HomeEquityLoan => "Home Equity Loan",
            Self::Refinance => "Refinance",
            Self::Renewal => "Renewal",
            Self::ReverseMortgage => "Reverse Mortgage",
        }
    }

    fn token(&self) -> &'static str {
        match self {
            Self::ConsolidateDebt => "consolidate_debt",
            Self::HomeEquityLineOfCredit => "heloc",
            Self::HomeEquityLoan => "home_equity_loan",
            Self::Refinance => "refinance",
            Self::Renewal => "renewal",
            Self::ReverseMortgage => "reverse_mortgage",
        }
    }
}

impl std::fmt::Display for NeedCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

impl std::str::FromStr for NeedCategory {
    type Err = String;

    /// Accepts the wire label (any case) or the short token, e.g. `heloc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.wire_value().eq_ignore_ascii_case(needle) || c.token() == needle)
            .ok_or_else(|| format!("Unknown need category: {needle}"))
    }
}

/// The single owned record behind the wizard.
///
/// Visible fields are written through the setters; the derived fields
/// (`amount`, `phone_full`, `timestamp`) are only ever written by this type
/// at well-defined points, so they always mirror their sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    homeowner_ontario: Option<HomeownerAnswer>,
    need_help: Option<NeedCategory>,
    amount_display: String,
    amount: String,
    first_name: String,
    last_name: String,
    email: String,
    phone_area: String,
    phone_prefix: String,
    phone_line: String,
    phone_full: String,
    timestamp: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// A blank form stamped with the current time.
    pub fn new() -> Self {
        Self {
            timestamp: stamp_timestamp(),
            ..Self::blank()
        }
    }

    /// A form with every field empty, timestamp included.
    pub fn blank() -> Self {
        Self {
            homeowner_ontario: None,
            need_help: None,
            amount_display: String::new(),
            amount: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_area: String::new(),
            phone_prefix: String::new(),
            phone_line: String::new(),
            phone_full: String::new(),
            timestamp: String::new(),
        }
    }

    pub fn homeowner_ontario(&self) -> Option<HomeownerAnswer> {
        self.homeowner_ontario
    }

    pub fn need_help(&self) -> Option<NeedCategory> {
        self.need_help
    }

    pub fn amount_display(&self) -> &str {
        &self.amount_display
    }

    /// Separator-free mirror of the display amount.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_area(&self) -> &str {
        &self.phone_area
    }

    pub fn phone_prefix(&self) -> &str {
        &self.phone_prefix
    }

    pub fn phone_line(&self) -> &str {
        &self.phone_line
    }

    /// Composed `(area) prefix-line`, empty until all segments are filled.
    pub fn phone_full(&self) -> &str {
        &self.phone_full
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn set_homeowner_ontario(&mut self, answer: HomeownerAnswer) {
        self.homeowner_ontario = Some(answer);
    }

    pub fn set_need_help(&mut self, category: NeedCategory) {
        self.need_help = Some(category);
    }

    /// Format the typed amount and refresh its numeric mirror.
    pub fn set_amount_display(&mut self, raw: &str) {
        self.amount_display = format_currency(raw);
        self.amount = strip_separators(&self.amount_display);
    }

    pub fn set_first_name(&mut self, value: &str) {
        self.first_name = value.to_string();
    }

    pub fn set_last_name(&mut self, value: &str) {
        self.last_name = value.to_string();
    }

    /// Surrounding whitespace is stripped, as an email input does.
    pub fn set_email(&mut self, value: &str) {
        self.email = value.trim().to_string();
    }

    pub fn set_phone_area(&mut self, value: &str) {
        self.phone_area = truncate_chars(value, PHONE_AREA_MAX);
        self.recompose_phone();
    }

    pub fn set_phone_prefix(&mut self, value: &str) {
        self.phone_prefix = truncate_chars(value, PHONE_PREFIX_MAX);
        self.recompose_phone();
    }

    pub fn set_phone_line(&mut self, value: &str) {
        self.phone_line = truncate_chars(value, PHONE_LINE_MAX);
        self.recompose_phone();
    }

    pub(crate) fn recompose_phone(&mut self) {
        self.phone_full = compose_phone(&self.phone_area, &self.phone_prefix, &self.phone_line);
    }

    pub(crate) fn refresh_timestamp(&mut self) {
        self.timestamp = stamp_timestamp();
    }

    /// Clear every field, derived mirrors and timestamp included.
    ///
    /// The timestamp stays blank until the next `attempt_submit` re-stamps it.
    pub fn reset(&mut self) {
        *self = Self::blank();
    }

    /// Whether every field is empty.
    pub fn is_blank(&self) -> bool {
        *self == Self::blank()
    }

    /// Field pairs in transmission order.
    pub fn to_fields(&self, submitted_via: &str) -> Vec<(&'static str, String)> {
        use field_names::*;
        vec![
            (
                HOMEOWNER_ONTARIO,
                self.homeowner_ontario
                    .map(|a| a.wire_value().to_string())
                    .unwrap_or_default(),
            ),
            (
                NEED_HELP,
                self.need_help
                    .map(|c| c.wire_value().to_string())
                    .unwrap_or_default(),
            ),
            (AMOUNT, self.amount.clone()),
            (FIRST_NAME, self.first_name.clone()),
            (LAST_NAME, self.last_name.clone()),
            (EMAIL, self.email.clone()),
            (PHONE, self.phone_full.clone()),
            (SUBMITTED_VIA, submitted_via.to_string()),
            (TIMESTAMP, self.timestamp.clone()),
        ]
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_stamped_but_otherwise_empty() {
        let form = FormState::new();
        assert!(!form.timestamp().is_empty());
        assert!(form.homeowner_ontario().is_none());
        assert!(form.amount().is_empty());
        assert!(!form.is_blank());
    }

    #[test]
    fn amount_mirror_follows_display() {
        let mut form = FormState::blank();
        form.set_amount_display("0050000.129");
        assert_eq!(form.amount_display(), "50,000.12");
        assert_eq!(form.amount(), "50000.12");

        form.set_amount_display("");
        assert_eq!(form.amount_display(), "");
        assert_eq!(form.amount(), "");
    }

    #[test]
    fn phone_segments_respect_max_length() {
        let mut form = FormState::blank();
        form.set_phone_area("41655");
        form.set_phone_prefix("5551");
        form.set_phone_line("013499");
        assert_eq!(form.phone_area(), "416");
        assert_eq!(form.phone_prefix(), "555");
        assert_eq!(form.phone_line(), "0134");
        assert_eq!(form.phone_full(), "(416) 555-0134");
    }

    #[test]
    fn email_is_stored_trimmed() {
        let mut form = FormState::blank();
        form.set_email("  home@owner.ca \n");
        assert_eq!(form.email(), "home@owner.ca");
        let fields = form.to_fields("multi_step_contact");
        assert_eq!(fields[5], ("email", "home@owner.ca".to_string()));
    }

    #[test]
    fn phone_full_tracks_segments() {
        let mut form = FormState::blank();
        form.set_phone_area("416");
        form.set_phone_prefix("555");
        assert_eq!(form.phone_full(), "");
        form.set_phone_line("0134");
        assert_eq!(form.phone_full(), "(416) 555-0134");
        form.set_phone_area("");
        assert_eq!(form.phone_full(), "");
    }

    #[test]
    fn reset_clears_derived_fields() {
        let mut form = FormState::new();
        form.set_amount_display("10000");
        form.set_phone_area("416");
        form.set_phone_prefix("555");
        form.set_phone_line("0134");
        assert_eq!(form.phone_full(), "(416) 555-0134");
        form.set_homeowner_ontario(HomeownerAnswer::Yes);
        form.reset();
        assert!(form.is_blank());
        assert_eq!(form.amount(), "");
        assert_eq!(form.phone_full(), "");
        assert_eq!(form.timestamp(), "");
    }

    #[test]
    fn fields_are_in_wire_order() {
        let mut form = FormState::blank();
        form.set_homeowner_ontario(HomeownerAnswer::No);
        form.set_need_help(NeedCategory::HomeEquityLineOfCredit);
        form.set_amount_display("1,500");
        let fields = form.to_fields("multi_step_contact");
        let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "homeowner_ontario",
                "need_help",
                "amount",
                "first_name",
                "last_name",
                "email",
                "phone",
                "submitted_via",
                "timestamp"
            ]
        );
        assert_eq!(fields[0].1, "No");
        assert_eq!(fields[1].1, "Home Equity Line of Credit");
        assert_eq!(fields[2].1, "1500");
        assert_eq!(fields[7].1, "multi_step_contact");
    }

    #[test]
    fn need_category_parses_label_and_token() {
        assert_eq!(
            "reverse mortgage".parse::<NeedCategory>().unwrap(),
            NeedCategory::ReverseMortgage
        );
        assert_eq!(
            "heloc".parse::<NeedCategory>().unwrap(),
            NeedCategory::HomeEquityLineOfCredit
        );
        assert!("payday".parse::<NeedCategory>().is_err());
    }

    #[test]
    fn display_matches_serde() {
        for category in NeedCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
        for answer in [HomeownerAnswer::Yes, HomeownerAnswer::No] {
            let json = serde_json::to_string(&answer).unwrap();
            assert_eq!(json, format!("\"{answer}\""));
        }
    }

    #[test]
    fn homeowner_parses_short_forms() {
        assert_eq!("Y".parse::<HomeownerAnswer>().unwrap(), HomeownerAnswer::Yes);
        assert_eq!("no".parse::<HomeownerAnswer>().unwrap(), HomeownerAnswer::No);
        assert!("maybe".parse::<HomeownerAnswer>().is_err());
    }
}
