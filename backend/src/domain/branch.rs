//! Branch aggregate model.
//!
//! A [`Branch`] owns its holiday calendar outright: holidays are embedded
//! value objects with no identity or storage outside the parent. Field
//! constraints live in validated newtypes so invalid data cannot be
//! represented once it crosses the boundary.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised by the branch newtype constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchValidationError {
    EmptyId,
    InvalidEmail,
    EmptyName,
    NameTooShort { min: usize },
    NameTooLong { max: usize },
    InvalidPhoneNumber,
    InvalidState,
}

impl fmt::Display for BranchValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "branch id must not be empty"),
            Self::InvalidEmail => write!(f, "email address has an invalid format"),
            Self::EmptyName => write!(f, "name must not be blank"),
            Self::NameTooShort { min } => {
                write!(f, "name must be at least {min} characters")
            }
            Self::NameTooLong { max } => {
                write!(f, "name must be at most {max} characters")
            }
            Self::InvalidPhoneNumber => write!(
                f,
                "phone number must be 10 to 13 digits with an optional leading +",
            ),
            Self::InvalidState => write!(f, "state must be ACTIVE or INACTIVE"),
        }
    }
}

impl std::error::Error for BranchValidationError {}

/// Minimum allowed length for branch and holiday names.
pub const NAME_MIN: usize = 3;
/// Maximum allowed length for branch and holiday names.
pub const NAME_MAX: usize = 100;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Syntax check only; deliverability is out of scope.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        let pattern = r"^\+?[0-9]{10,13}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// Server-generated opaque branch identifier.
///
/// Generated identifiers are UUID v4 in textual form, but any non-blank
/// string read back from storage is accepted so documents round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchId(String);

impl BranchId {
    /// Validate and construct a [`BranchId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, BranchValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`BranchId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, BranchValidationError> {
        if id.trim().is_empty() {
            return Err(BranchValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for BranchId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<BranchId> for String {
    fn from(value: BranchId) -> Self {
        value.0
    }
}

impl TryFrom<String> for BranchId {
    type Error = BranchValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Branch contact email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, BranchValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, BranchValidationError> {
        if !email_regex().is_match(&email) {
            return Err(BranchValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = BranchValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

fn validate_name(name: &str) -> Result<(), BranchValidationError> {
    if name.trim().is_empty() {
        return Err(BranchValidationError::EmptyName);
    }
    let length = name.chars().count();
    if length < NAME_MIN {
        return Err(BranchValidationError::NameTooShort { min: NAME_MIN });
    }
    if length > NAME_MAX {
        return Err(BranchValidationError::NameTooLong { max: NAME_MAX });
    }
    Ok(())
}

/// Human-readable branch name (3 to 100 characters, non-blank).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Validate and construct a [`BranchName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, BranchValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, BranchValidationError> {
        validate_name(&name)?;
        Ok(Self(name))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<BranchName> for String {
    fn from(value: BranchName) -> Self {
        value.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = BranchValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Branch phone number: 10 to 13 digits with an optional leading `+`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and construct a [`PhoneNumber`] from owned input.
    pub fn new(phone: impl Into<String>) -> Result<Self, BranchValidationError> {
        Self::from_owned(phone.into())
    }

    fn from_owned(phone: String) -> Result<Self, BranchValidationError> {
        if !phone_regex().is_match(&phone) {
            return Err(BranchValidationError::InvalidPhoneNumber);
        }
        Ok(Self(phone))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = BranchValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Operational state of a branch.
///
/// Closed two-value set; no transition rules are enforced (none exist in
/// the business requirements). Stored and serialised in upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchState {
    /// The branch is open for business.
    #[serde(rename = "ACTIVE")]
    Active,
    /// The branch is closed but retained in the directory.
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl BranchState {
    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for BranchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BranchState {
    type Err = BranchValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(BranchValidationError::InvalidState),
        }
    }
}

/// Holiday name (3 to 100 characters, non-blank).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HolidayName(String);

impl HolidayName {
    /// Validate and construct a [`HolidayName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, BranchValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, BranchValidationError> {
        validate_name(&name)?;
        Ok(Self(name))
    }
}

impl AsRef<str> for HolidayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HolidayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<HolidayName> for String {
    fn from(value: HolidayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for HolidayName {
    type Error = BranchValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Non-business day embedded in a branch calendar.
///
/// Holidays carry no identity of their own and duplicate dates may
/// coexist; the parent branch owns the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// UTC timestamp marking the holiday.
    pub date: DateTime<Utc>,
    /// Display name of the holiday.
    pub name: HolidayName,
}

impl Holiday {
    /// True when this holiday falls on the given calendar date.
    ///
    /// Comparison ignores the time-of-day component.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date.date_naive() == date
    }
}

/// Validated input for creating a new branch.
///
/// Carries no identity or timestamps; the service assigns those. Any
/// holidays supplied alongside a create request are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBranch {
    /// Contact email address.
    pub email_address: EmailAddress,
    /// Branch display name.
    pub name: BranchName,
    /// Contact phone number.
    pub phone_number: PhoneNumber,
    /// Operational state.
    pub state: BranchState,
}

/// Bank branch aggregate.
///
/// ## Invariants
/// - `last_modified_date >= creation_date`, refreshed by every mutator.
/// - `creation_date` is set once at construction and never changes.
/// - `holidays` is always present; documents missing the field
///   deserialise to an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    id: BranchId,
    email_address: EmailAddress,
    name: BranchName,
    phone_number: PhoneNumber,
    state: BranchState,
    creation_date: DateTime<Utc>,
    last_modified_date: DateTime<Utc>,
    #[serde(default)]
    holidays: Vec<Holiday>,
}

impl Branch {
    /// Create a branch from a validated draft.
    ///
    /// Both timestamps are set to `now` and the holiday calendar starts
    /// empty regardless of what the caller supplied elsewhere.
    pub fn create(id: BranchId, draft: NewBranch, now: DateTime<Utc>) -> Self {
        let NewBranch {
            email_address,
            name,
            phone_number,
            state,
        } = draft;
        Self {
            id,
            email_address,
            name,
            phone_number,
            state,
            creation_date: now,
            last_modified_date: now,
            holidays: Vec::new(),
        }
    }

    /// Stable branch identifier.
    pub fn id(&self) -> &BranchId {
        &self.id
    }

    /// Contact email address.
    pub fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    /// Branch display name.
    pub fn name(&self) -> &BranchName {
        &self.name
    }

    /// Contact phone number.
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Operational state.
    pub fn state(&self) -> BranchState {
        self.state
    }

    /// Timestamp of creation; immutable after construction.
    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    /// Timestamp of the most recent mutation.
    pub fn last_modified_date(&self) -> DateTime<Utc> {
        self.last_modified_date
    }

    /// Holiday calendar in insertion order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Replace the phone number and refresh the modification timestamp.
    pub fn set_phone_number(&mut self, phone_number: PhoneNumber, now: DateTime<Utc>) {
        self.phone_number = phone_number;
        self.last_modified_date = now;
    }

    /// Append a holiday, preserving insertion order, and refresh the
    /// modification timestamp.
    pub fn push_holiday(&mut self, holiday: Holiday, now: DateTime<Utc>) {
        self.holidays.push(holiday);
        self.last_modified_date = now;
    }

    /// Remove every holiday falling on `date`, refreshing the modification
    /// timestamp when at least one was removed. Returns the removed count.
    pub fn remove_holidays_on(&mut self, date: NaiveDate, now: DateTime<Utc>) -> usize {
        let before = self.holidays.len();
        self.holidays.retain(|holiday| !holiday.falls_on(date));
        let removed = before - self.holidays.len();
        if removed > 0 {
            self.last_modified_date = now;
        }
        removed
    }

    /// Remove the whole holiday calendar and refresh the modification
    /// timestamp. Returns the removed count.
    pub fn clear_holidays(&mut self, now: DateTime<Utc>) -> usize {
        let removed = self.holidays.len();
        self.holidays.clear();
        self.last_modified_date = now;
        removed
    }

    /// True when some holiday falls on the same calendar date as `at`.
    pub fn is_holiday(&self, at: DateTime<Utc>) -> bool {
        let date = at.date_naive();
        self.holidays.iter().any(|holiday| holiday.falls_on(date))
    }
}
