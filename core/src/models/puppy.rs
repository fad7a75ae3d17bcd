// core/src/models/puppy.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{KennelError, KennelResult};

pub const DEFAULT_HEALTH_STATUS: &str = "100% Healthy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
  Male,
  Female,
  /// A litter listed as one entry.
  #[serde(rename = "Male & Female")]
  MaleAndFemale,
}

impl Gender {
  pub fn as_str(&self) -> &'static str {
    match self {
      Gender::Male => "Male",
      Gender::Female => "Female",
      Gender::MaleAndFemale => "Male & Female",
    }
  }
}

impl fmt::Display for Gender {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Gender {
  type Err = KennelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Male" => Ok(Gender::Male),
      "Female" => Ok(Gender::Female),
      "Male & Female" => Ok(Gender::MaleAndFemale),
      other => Err(KennelError::validation(format!("unknown gender '{}'", other))),
    }
  }
}

/// A catalog listing. `id` is assigned once by the catalog and never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puppy {
  pub id: Uuid,
  pub name: String,
  pub breed: String,
  pub age: String,
  pub weight: String,
  pub gender: Gender,
  pub price: i32,
  pub color: String,
  pub description: Option<String>,
  pub images: Vec<String>,
  pub is_available: bool,
  pub health_status: String,
  pub is_vaccinated: bool,
  pub is_insured: bool,
  pub free_delivery: bool,
}

/// Input for creating a listing. Omitted status fields take the catalog defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPuppy {
  pub name: String,
  pub breed: String,
  pub age: String,
  pub weight: String,
  pub gender: Gender,
  pub price: i32,
  pub color: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub images: Vec<String>,
  #[serde(default)]
  pub is_available: Option<bool>,
  #[serde(default)]
  pub health_status: Option<String>,
  #[serde(default)]
  pub is_vaccinated: Option<bool>,
  #[serde(default)]
  pub is_insured: Option<bool>,
  #[serde(default)]
  pub free_delivery: Option<bool>,
}

impl NewPuppy {
  pub fn new(
    name: impl Into<String>,
    breed: impl Into<String>,
    age: impl Into<String>,
    weight: impl Into<String>,
    gender: Gender,
    price: i32,
    color: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      breed: breed.into(),
      age: age.into(),
      weight: weight.into(),
      gender,
      price,
      color: color.into(),
      description: None,
      images: Vec::new(),
      is_available: None,
      health_status: None,
      is_vaccinated: None,
      is_insured: None,
      free_delivery: None,
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn with_images<I, S>(mut self, images: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.images = images.into_iter().map(Into::into).collect();
    self
  }

  /// Parses a loosely-typed request body. Missing fields, wrong types and
  /// unknown genders all surface as validation errors.
  pub fn from_value(value: serde_json::Value) -> KennelResult<Self> {
    serde_json::from_value(value).map_err(|e| KennelError::validation(e.to_string()))
  }

  pub fn validate(&self) -> KennelResult<()> {
    require_text("name", &self.name)?;
    require_text("breed", &self.breed)?;
    require_text("age", &self.age)?;
    require_text("weight", &self.weight)?;
    require_text("color", &self.color)?;
    require_price(self.price)?;
    if let Some(status) = &self.health_status {
      require_text("healthStatus", status)?;
    }
    Ok(())
  }

  pub fn into_puppy(self, id: Uuid) -> Puppy {
    Puppy {
      id,
      name: self.name,
      breed: self.breed,
      age: self.age,
      weight: self.weight,
      gender: self.gender,
      price: self.price,
      color: self.color,
      description: self.description.filter(|d| !d.trim().is_empty()),
      images: self.images,
      is_available: self.is_available.unwrap_or(true),
      health_status: self
        .health_status
        .unwrap_or_else(|| DEFAULT_HEALTH_STATUS.to_string()),
      is_vaccinated: self.is_vaccinated.unwrap_or(true),
      is_insured: self.is_insured.unwrap_or(true),
      free_delivery: self.free_delivery.unwrap_or(true),
    }
  }
}

/// Partial update. Only fields present in the body are touched; an `id` key is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuppyPatch {
  pub name: Option<String>,
  pub breed: Option<String>,
  pub age: Option<String>,
  pub weight: Option<String>,
  pub gender: Option<Gender>,
  pub price: Option<i32>,
  pub color: Option<String>,
  /// `Some(None)` clears the description, `None` leaves it alone.
  #[serde(default, deserialize_with = "present_or_null")]
  pub description: Option<Option<String>>,
  pub images: Option<Vec<String>>,
  pub is_available: Option<bool>,
  pub health_status: Option<String>,
  pub is_vaccinated: Option<bool>,
  pub is_insured: Option<bool>,
  pub free_delivery: Option<bool>,
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Some)
}

impl PuppyPatch {
  pub fn from_value(value: serde_json::Value) -> KennelResult<Self> {
    serde_json::from_value(value).map_err(|e| KennelError::validation(e.to_string()))
  }

  pub fn validate(&self) -> KennelResult<()> {
    let texts = [
      ("name", &self.name),
      ("breed", &self.breed),
      ("age", &self.age),
      ("weight", &self.weight),
      ("color", &self.color),
      ("healthStatus", &self.health_status),
    ];
    for (field, value) in texts {
      if let Some(value) = value {
        require_text(field, value)?;
      }
    }
    if let Some(price) = self.price {
      require_price(price)?;
    }
    Ok(())
  }

  pub fn apply(self, puppy: &mut Puppy) {
    if let Some(name) = self.name {
      puppy.name = name;
    }
    if let Some(breed) = self.breed {
      puppy.breed = breed;
    }
    if let Some(age) = self.age {
      puppy.age = age;
    }
    if let Some(weight) = self.weight {
      puppy.weight = weight;
    }
    if let Some(gender) = self.gender {
      puppy.gender = gender;
    }
    if let Some(price) = self.price {
      puppy.price = price;
    }
    if let Some(color) = self.color {
      puppy.color = color;
    }
    if let Some(description) = self.description {
      puppy.description = description.filter(|d| !d.trim().is_empty());
    }
    if let Some(images) = self.images {
      puppy.images = images;
    }
    if let Some(is_available) = self.is_available {
      puppy.is_available = is_available;
    }
    if let Some(health_status) = self.health_status {
      puppy.health_status = health_status;
    }
    if let Some(is_vaccinated) = self.is_vaccinated {
      puppy.is_vaccinated = is_vaccinated;
    }
    if let Some(is_insured) = self.is_insured {
      puppy.is_insured = is_insured;
    }
    if let Some(free_delivery) = self.free_delivery {
      puppy.free_delivery = free_delivery;
    }
  }
}

fn require_text(field: &str, value: &str) -> KennelResult<()> {
  if value.trim().is_empty() {
    return Err(KennelError::validation(format!("{} must not be empty", field)));
  }
  Ok(())
}

fn require_price(price: i32) -> KennelResult<()> {
  if price < 0 {
    return Err(KennelError::validation(format!(
      "price must not be negative (got {})",
      price
    )));
  }
  Ok(())
}
