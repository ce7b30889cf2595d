//! Substance records as returned by the PsychonautWiki API
//!
//! The upstream data is community curated and frequently incomplete, so most fields are
//! optional. An absent field decodes to `None` and is omitted again on encode; nothing is
//! defaulted. Required fields that are missing fail decoding.

use serde::{Deserialize, Serialize};

/// A cataloged psychoactive substance
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Substance {
    pub name: String,

    /// Routes of administration, each with its own dosage and duration data
    #[serde(rename = "roas")]
    pub routes_of_administration: Vec<AdministrationRoute>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub addiction_potential: Option<String>,

    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub classification: Option<SubstanceClass>,

    pub images: Vec<ImageLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<ToleranceInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_names: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_tolerances: Option<Vec<String>>,

    pub effects: Vec<SubstanceEffect>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub toxicity: Option<Vec<String>>,
}

/// A subjective effect with a link to its wiki page
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SubstanceEffect {
    pub name: String,
    pub url: String,
}

/// Prose descriptions of how long tolerance takes to build and decay
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ToleranceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
}

/// A method of taking a substance, e.g. `oral`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AdministrationRoute {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose: Option<DosageInfo>,

    pub duration: DurationInfo,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bioavailability: Option<Bioavailability>,
}

/// Chemical and psychoactive class tags
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SubstanceClass {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychoactive: Option<Vec<String>>,
}

/// A link to an image of the substance
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImageLink {
    pub image: String,
}

/// Dosage ranges for one route of administration.
///
/// The server is expected to order the ranges `threshold <= light <= common <= strong <= heavy`
/// but this is not checked.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DosageInfo {
    /// Unit every amount in this record is measured in, e.g. `mg`
    pub units: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heavy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common: Option<DosageAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<DosageAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong: Option<DosageAmount>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct DosageAmount {
    pub min: f64,
    pub max: f64,
}

/// Fraction of a dose reaching systemic circulation
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct Bioavailability {
    pub min: f64,
    pub max: f64,
}

/// The effect timeline of a route, split into phases
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DurationInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afterglow: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comeup: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Duration>,
}

/// The length of one duration phase, e.g. 1 to 2 `hours`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Duration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub units: String,
}
