//! Multi-step admission form controller.
//!
//! Models the client-side SPMB form: four fixed steps, per-field
//! enabled/required gating from a runtime-loaded schema, clamped
//! forward/backward navigation, and a consent-gated final submission that
//! aggregates every collected field into one payload.
//!
//! The controller never talks to the network itself. `try_submit` hands the
//! aggregated payload to the caller; the caller performs the store call and
//! reports the outcome back via [`FormController::mark_submitted`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The four steps of the admission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    StudentData,
    GuardianData,
    PriorSchool,
    Confirmation,
}

/// Total number of steps.
pub const TOTAL_STEPS: u8 = 4;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 4;

impl FormStep {
    /// Convert a 1-based step number to a `FormStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::StudentData),
            2 => Ok(Self::GuardianData),
            3 => Ok(Self::PriorSchool),
            4 => Ok(Self::Confirmation),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::StudentData => 1,
            Self::GuardianData => 2,
            Self::PriorSchool => 3,
            Self::Confirmation => 4,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::StudentData => "Data Siswa",
            Self::GuardianData => "Data Orang Tua",
            Self::PriorSchool => "Data Sekolah Asal",
            Self::Confirmation => "Konfirmasi",
        }
    }
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Every collectible field of the admission form. Each field belongs to
/// exactly one step; serde names match the submission payload keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    // Step 1: student data
    NamaLengkap,
    TempatLahir,
    TanggalLahir,
    JenisKelamin,
    Alamat,
    Telepon,
    Email,
    JalurPendaftaran,
    GelombangPendaftaran,
    // Step 2: guardian data
    NamaAyah,
    PekerjaanAyah,
    NamaIbu,
    PekerjaanIbu,
    TeleponWali,
    // Step 3: prior school
    AsalSekolah,
    AlamatSekolah,
    Prestasi,
}

/// All fields, in declaration order. Used to build default schemas and to
/// iterate per-step field sets.
pub const ALL_FIELDS: &[FormField] = &[
    FormField::NamaLengkap,
    FormField::TempatLahir,
    FormField::TanggalLahir,
    FormField::JenisKelamin,
    FormField::Alamat,
    FormField::Telepon,
    FormField::Email,
    FormField::JalurPendaftaran,
    FormField::GelombangPendaftaran,
    FormField::NamaAyah,
    FormField::PekerjaanAyah,
    FormField::NamaIbu,
    FormField::PekerjaanIbu,
    FormField::TeleponWali,
    FormField::AsalSekolah,
    FormField::AlamatSekolah,
    FormField::Prestasi,
];

impl FormField {
    /// The step this field is collected on.
    pub fn step(self) -> FormStep {
        match self {
            Self::NamaLengkap
            | Self::TempatLahir
            | Self::TanggalLahir
            | Self::JenisKelamin
            | Self::Alamat
            | Self::Telepon
            | Self::Email
            | Self::JalurPendaftaran
            | Self::GelombangPendaftaran => FormStep::StudentData,
            Self::NamaAyah
            | Self::PekerjaanAyah
            | Self::NamaIbu
            | Self::PekerjaanIbu
            | Self::TeleponWali => FormStep::GuardianData,
            Self::AsalSekolah | Self::AlamatSekolah | Self::Prestasi => FormStep::PriorSchool,
        }
    }

    /// Payload key / schema key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NamaLengkap => "nama_lengkap",
            Self::TempatLahir => "tempat_lahir",
            Self::TanggalLahir => "tanggal_lahir",
            Self::JenisKelamin => "jenis_kelamin",
            Self::Alamat => "alamat",
            Self::Telepon => "telepon",
            Self::Email => "email",
            Self::JalurPendaftaran => "jalur_pendaftaran",
            Self::GelombangPendaftaran => "gelombang_pendaftaran",
            Self::NamaAyah => "nama_ayah",
            Self::PekerjaanAyah => "pekerjaan_ayah",
            Self::NamaIbu => "nama_ibu",
            Self::PekerjaanIbu => "pekerjaan_ibu",
            Self::TeleponWali => "telepon_wali",
            Self::AsalSekolah => "asal_sekolah",
            Self::AlamatSekolah => "alamat_sekolah",
            Self::Prestasi => "prestasi",
        }
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Per-field gating configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Whether the field is rendered and collected at all.
    pub enabled: bool,
    /// Whether a non-empty value is needed to advance past the field's step.
    pub required: bool,
}

/// Field gating schema, loaded once at startup via [`FormSchema::from_json`]
/// (which rejects unknown field names, so a typo in the config file fails
/// fast instead of silently gating nothing).
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FormSchema {
    rules: BTreeMap<FormField, FieldRule>,
}

impl Default for FormSchema {
    /// Default schema: every field enabled, only the full name required.
    fn default() -> Self {
        let rules = ALL_FIELDS
            .iter()
            .map(|&field| {
                let required = field == FormField::NamaLengkap;
                (field, FieldRule { enabled: true, required })
            })
            .collect();
        Self { rules }
    }
}

impl FormSchema {
    /// Parse a schema from JSON, overlaying the provided rules on the
    /// defaults. Unknown field names are rejected.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let overrides: BTreeMap<FormField, FieldRule> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid form schema: {e}")))?;

        let mut schema = Self::default();
        schema.rules.extend(overrides);
        Ok(schema)
    }

    /// The gating rule for a field.
    pub fn rule(&self, field: FormField) -> FieldRule {
        self.rules[&field]
    }

    /// Fields of a step that are both required and enabled.
    pub fn required_fields(&self, step: FormStep) -> Vec<FormField> {
        ALL_FIELDS
            .iter()
            .copied()
            .filter(|f| f.step() == step)
            .filter(|&f| {
                let rule = self.rule(f);
                rule.enabled && rule.required
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// State machine over the four form steps plus a terminal submitted state.
#[derive(Debug, Clone)]
pub struct FormController {
    schema: FormSchema,
    values: BTreeMap<FormField, String>,
    step: u8,
    persetujuan: bool,
    registration_number: Option<String>,
}

impl FormController {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            values: BTreeMap::new(),
            step: MIN_STEP,
            persetujuan: false,
            registration_number: None,
        }
    }

    /// Current 1-based step number.
    pub fn current_step(&self) -> u8 {
        self.step
    }

    /// Whether the form reached the terminal submitted state.
    pub fn is_submitted(&self) -> bool {
        self.registration_number.is_some()
    }

    /// The registration number returned by the store, once submitted.
    pub fn registration_number(&self) -> Option<&str> {
        self.registration_number.as_deref()
    }

    /// Record a field value. Disabled fields are not rendered, so a value
    /// for one is dropped rather than collected.
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        if self.schema.rule(field).enabled {
            self.values.insert(field, value.into());
        }
    }

    /// The collected value for a field, if any.
    pub fn value(&self, field: FormField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Record the applicant's consent checkbox on the confirmation step.
    pub fn set_persetujuan(&mut self, agreed: bool) {
        self.persetujuan = agreed;
    }

    /// Advance one step. Clamped at the final step. Fails when a required,
    /// enabled field of the current step has no value, naming the missing
    /// field(s); the step does not change in that case.
    pub fn next(&mut self) -> Result<(), CoreError> {
        if self.step >= MAX_STEP {
            return Ok(());
        }

        self.validate_step(self.step)?;
        self.step += 1;
        Ok(())
    }

    /// Go back one step. Clamped at the first step; never validates.
    pub fn previous(&mut self) {
        if self.step > MIN_STEP {
            self.step -= 1;
        }
    }

    /// Validate the required+enabled fields of a step against the collected
    /// values. Fields of other steps are never re-checked here.
    fn validate_step(&self, step_number: u8) -> Result<(), CoreError> {
        let step = FormStep::from_number(step_number)?;
        let missing: Vec<&str> = self
            .schema
            .required_fields(step)
            .into_iter()
            .filter(|&f| self.value(f).is_none_or(|v| v.trim().is_empty()))
            .map(FormField::as_str)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }

    /// Produce the aggregated submission payload.
    ///
    /// Only allowed on the confirmation step with consent given; otherwise
    /// an error is returned and nothing changes; entered values survive so
    /// the applicant can correct and retry. Keys are the payload field
    /// names; disabled fields never appear.
    pub fn try_submit(&self) -> Result<BTreeMap<FormField, String>, CoreError> {
        if self.is_submitted() {
            return Err(CoreError::Validation(
                "Form has already been submitted".to_string(),
            ));
        }
        if self.step != MAX_STEP {
            return Err(CoreError::Validation(format!(
                "Cannot submit from step {}. Must be on step {MAX_STEP}",
                self.step
            )));
        }
        if !self.persetujuan {
            return Err(CoreError::Validation(
                "persetujuan must be accepted before submitting".to_string(),
            ));
        }

        Ok(self.values.clone())
    }

    /// Record a successful store call, moving to the terminal state and
    /// surfacing the registration number for display.
    pub fn mark_submitted(&mut self, registration_number: impl Into<String>) {
        self.registration_number = Some(registration_number.into());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
