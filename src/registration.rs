//! Attendee registration records and the form used to create them.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use uuid::Uuid;

use crate::error::ValidationError;

/// Prompt shown when a submission has empty fields.
pub const VALIDATION_PROMPT: &str = "Por favor, completa todos los campos";

/// Number of id characters displayed before the ellipsis in tables.
const SHORT_ID_LEN: usize = 8;

/// The inputs of the registration form, in display order.
#[derive(
    Debug, Copy, Clone, Default, Eq, Hash, PartialEq, Display, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    #[default]
    Name,
    IdCode,
    Affiliation,
    ParticipantType,
    Email,
}

impl FormField {
    /// Label rendered above the input.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nombre y apellidos",
            FormField::IdCode => "DNI/ código de estudiante",
            FormField::Affiliation => "Carrera/ Empresa",
            FormField::ParticipantType => "Tipo de participante o cargo",
            FormField::Email => "Correo",
        }
    }

    /// Hint rendered while the input is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Ingresa tu nombre completo",
            FormField::IdCode => "Ingresa tu DNI o código",
            FormField::Affiliation => "Ingresa tu carrera o empresa",
            FormField::ParticipantType => {
                "Ej: Estudiante, Docente, Profesional"
            }
            FormField::Email => "Ingresa tu correo electrónico",
        }
    }

    /// Next field, wrapping around to the first.
    pub fn next(self) -> Self {
        let fields = FormField::iter().collect::<Vec<_>>();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(idx + 1) % fields.len()]
    }

    /// Previous field, wrapping around to the last.
    pub fn previous(self) -> Self {
        let fields = FormField::iter().collect::<Vec<_>>();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(idx + fields.len() - 1) % fields.len()]
    }
}

/// Values typed into the registration form.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub id_code: String,
    pub affiliation: String,
    pub participant_type: String,
    pub email: String,
}

impl RegistrationForm {
    /// Returns the current value of a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::IdCode => &self.id_code,
            FormField::Affiliation => &self.affiliation,
            FormField::ParticipantType => &self.participant_type,
            FormField::Email => &self.email,
        }
    }

    /// Returns a mutable handle to a field's value.
    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::IdCode => &mut self.id_code,
            FormField::Affiliation => &mut self.affiliation,
            FormField::ParticipantType => &mut self.participant_type,
            FormField::Email => &mut self.email,
        }
    }

    /// Every field must contain something other than whitespace. Values are
    /// not otherwise checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let empty = FormField::iter()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect::<Vec<_>>();

        if empty.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(empty))
        }
    }
}

/// One attendee's submitted form data plus its id and timestamp.
///
/// Serialized field names match the layout of the persisted collection.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "dni")]
    pub id_code: String,
    #[serde(rename = "carrera")]
    pub affiliation: String,
    #[serde(rename = "tipoParticipante")]
    pub participant_type: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "fechaRegistro")]
    pub registered_at: String,
}

impl Registration {
    /// Creates a registration with a fresh v4 UUID stamped with the current
    /// time.
    pub fn new(form: RegistrationForm) -> Self {
        Self::from_form(form, Uuid::new_v4().to_string(), Utc::now())
    }

    /// Creates a registration with an explicit id and timestamp.
    pub fn from_form(
        form: RegistrationForm,
        id: String,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: form.name,
            id_code: form.id_code,
            affiliation: form.affiliation,
            participant_type: form.participant_type,
            email: form.email,
            registered_at: registered_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// First characters of the id followed by an ellipsis.
    pub fn short_id(&self) -> String {
        let prefix = self.id.chars().take(SHORT_ID_LEN).collect::<String>();
        format!("{prefix}...")
    }

    /// Registration time in the local timezone, e.g. `18/10/2026, 9:05:03`.
    pub fn display_date(&self) -> String {
        format_display_date(&self.registered_at, &chrono::Local)
    }
}

/// Formats an RFC 3339 timestamp as `d/m/yyyy, H:MM:SS` in `tz`. Values that
/// do not parse are returned unchanged.
pub fn format_display_date<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(tz)
            .format("%-d/%-m/%Y, %-H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "./registration_tests.rs"]
mod tests;
