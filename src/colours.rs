//! Demo domain: user colour choices
//!
//! `UserColour` is the labelled enumeration served by the API, and
//! `ColourSelection` is the form with three single-choice fields and one
//! multi-choice field.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumMessage, IntoStaticStr};

use crate::describe::Describe;
use crate::error::{EnumSelectError, FieldError, Result};
use crate::lookup;
use crate::options::{self, SelectOption};

/// Placeholder shown ahead of the colour options.
pub const COLOUR_EMPTY_TEXT: &str = "-- 색상을 선택하세요 --";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumMessage,
    IntoStaticStr,
)]
pub enum UserColour {
    #[strum(message = "밝은 핑크")]
    BrightPink = 1,
    #[strum(message = "하늘색")]
    SkyBlue = 2,
    #[strum(message = "연두색")]
    LightGreen = 3,
    #[strum(message = "주황색")]
    Orange = 4,
    #[strum(message = "보라색")]
    Purple = 5,
    #[strum(message = "진한 핑크색")]
    DarkPink = 6,
}

impl Describe for UserColour {
    const ENUM_NAME: &'static str = "UserColour";

    fn value(self) -> i32 {
        self as i32
    }

    fn declared_label(self) -> Option<&'static str> {
        self.get_message()
    }
}

impl UserColour {
    /// Parse a submitted value: the integer (`"2"`) or the symbolic name
    /// (`"SkyBlue"`).
    /// Matching is exact, the same rule select lists use: `"+2"` and
    /// `"02"` are not `SkyBlue`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::variants()
            .into_iter()
            .find(|c| options::selection_key(*c) == s || c.name() == s)
    }
}

/// JSON shape of `GET /api/colours`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourInfo {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<UserColour> for ColourInfo {
    fn from(colour: UserColour) -> Self {
        Self {
            id: colour.value(),
            name: colour.name().to_string(),
            description: lookup::description(colour).to_string(),
        }
    }
}

pub fn all_colours() -> Vec<ColourInfo> {
    lookup::all_with_descriptions::<UserColour>()
        .into_iter()
        .map(|(colour, description)| ColourInfo {
            id: colour.value(),
            name: colour.name().to_string(),
            description: description.to_string(),
        })
        .collect()
}

// ── Form model ─────────────────────────────────────────────────

const BASIC_FIELD: &str = "basic_selected_colour";
const CUSTOM_HELPER_FIELD: &str = "custom_helper_selected_colour";
const TAG_HELPER_FIELD: &str = "tag_helper_selected_colour";
const MULTIPLE_FIELD: &str = "multiple_colours";

/// Submitted form, values still as strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourSelectionForm {
    #[serde(default)]
    pub basic_selected_colour: Option<String>,
    #[serde(default)]
    pub custom_helper_selected_colour: Option<String>,
    #[serde(default)]
    pub tag_helper_selected_colour: Option<String>,
    #[serde(default)]
    pub multiple_colours: Vec<String>,
}

/// Validated colour choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColourSelection {
    pub basic_selected_colour: UserColour,
    pub custom_helper_selected_colour: UserColour,
    pub tag_helper_selected_colour: UserColour,
    pub multiple_colours: Vec<UserColour>,
}

/// Labels echoed back after a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDescriptions {
    pub basic_selected_colour: String,
    pub custom_helper_selected_colour: String,
    pub tag_helper_selected_colour: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_colours: Option<String>,
}

/// A single-choice field with its option list pre-selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    pub field: String,
    pub options: Vec<SelectOption>,
}

fn required_colour(
    field: &'static str,
    required_message: &str,
    raw: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<UserColour> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => {
            errors.push(FieldError::new(field, required_message));
            None
        }
        Some(s) => {
            let colour = UserColour::parse(s);
            if colour.is_none() {
                errors.push(FieldError::new(field, format!("알 수 없는 색상입니다: '{s}'")));
            }
            colour
        }
    }
}

impl ColourSelectionForm {
    /// Validate every field, collecting all errors rather than stopping at
    /// the first.
    pub fn validate(&self) -> Result<ColourSelection> {
        let mut errors = Vec::new();

        let basic = required_colour(
            BASIC_FIELD,
            "1번 색상을 선택해주세요.",
            self.basic_selected_colour.as_deref(),
            &mut errors,
        );
        let custom = required_colour(
            CUSTOM_HELPER_FIELD,
            "2번 색상을 선택해주세요.",
            self.custom_helper_selected_colour.as_deref(),
            &mut errors,
        );
        let tag = required_colour(
            TAG_HELPER_FIELD,
            "3번 색상을 선택해주세요.",
            self.tag_helper_selected_colour.as_deref(),
            &mut errors,
        );

        let mut multiple = Vec::with_capacity(self.multiple_colours.len());
        for raw in &self.multiple_colours {
            match UserColour::parse(raw) {
                Some(colour) => multiple.push(colour),
                None => errors.push(FieldError::new(
                    MULTIPLE_FIELD,
                    format!("알 수 없는 색상입니다: '{raw}'"),
                )),
            }
        }

        match (basic, custom, tag) {
            (Some(basic), Some(custom), Some(tag)) if errors.is_empty() => Ok(ColourSelection {
                basic_selected_colour: basic,
                custom_helper_selected_colour: custom,
                tag_helper_selected_colour: tag,
                multiple_colours: multiple,
            }),
            _ => Err(EnumSelectError::Validation(errors)),
        }
    }
}

impl ColourSelection {
    /// Initial choices shown before anything is submitted.
    pub fn default_model() -> Self {
        Self {
            basic_selected_colour: UserColour::BrightPink,
            custom_helper_selected_colour: UserColour::SkyBlue,
            tag_helper_selected_colour: UserColour::LightGreen,
            multiple_colours: vec![UserColour::BrightPink, UserColour::SkyBlue],
        }
    }

    pub fn describe(&self) -> SelectionDescriptions {
        let multiple = (!self.multiple_colours.is_empty()).then(|| {
            self.multiple_colours
                .iter()
                .map(|c| lookup::description(*c))
                .collect::<Vec<_>>()
                .join(", ")
        });

        SelectionDescriptions {
            basic_selected_colour: lookup::description(self.basic_selected_colour).to_string(),
            custom_helper_selected_colour: lookup::description(self.custom_helper_selected_colour)
                .to_string(),
            tag_helper_selected_colour: lookup::description(self.tag_helper_selected_colour)
                .to_string(),
            multiple_colours: multiple,
        }
    }

    /// Option lists for each single-choice field plus the checkbox list,
    /// each pre-selected from this model.
    pub fn field_options(&self, empty_text: &str) -> Vec<FieldOptions> {
        let single = [
            (BASIC_FIELD, self.basic_selected_colour),
            (CUSTOM_HELPER_FIELD, self.custom_helper_selected_colour),
            (TAG_HELPER_FIELD, self.tag_helper_selected_colour),
        ];

        let mut fields: Vec<FieldOptions> = single
            .into_iter()
            .map(|(field, colour)| {
                let key = options::selection_key(colour);
                FieldOptions {
                    field: field.to_string(),
                    options: options::to_select_list_with_empty::<UserColour>(
                        empty_text,
                        Some(key.as_str()),
                    ),
                }
            })
            .collect();

        let checked: Vec<String> = self
            .multiple_colours
            .iter()
            .map(|c| options::selection_key(*c))
            .collect();
        fields.push(FieldOptions {
            field: MULTIPLE_FIELD.to_string(),
            options: options::to_multi_select_list::<UserColour, _>(&checked),
        });

        fields
    }
}
