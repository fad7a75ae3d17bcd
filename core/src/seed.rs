// core/src/seed.rs

//! Launch listings loaded into an empty catalog when seeding is enabled.

use crate::models::{Gender, NewPuppy};

pub fn default_puppies() -> Vec<NewPuppy> {
  vec![
    NewPuppy::new(
      "Thunder & Storm Twins",
      "American Pit Bull Terrier",
      "8 weeks old",
      "10-12 lbs",
      Gender::MaleAndFemale,
      3000,
      "Brindle and Black with White",
    )
    .with_description(
      "Beautiful twin puppies with excellent temperament. Fully vaccinated and health guaranteed. \
       Two adorable puppies available - each puppy is priced individually.",
    )
    .with_images([
      "/attached_assets/thunder-storm-1.jpg",
      "/attached_assets/thunder-storm-2.jpg",
      "/attached_assets/thunder-storm-3.jpg",
      "/attached_assets/thunder-storm-4.jpg",
    ]),
    NewPuppy::new(
      "Blaze",
      "American Pit Bull Terrier",
      "9 weeks old",
      "13 lbs",
      Gender::Male,
      3500,
      "Blue/Gray with White",
    )
    .with_description(
      "Energetic male puppy with exceptional bloodlines. Perfect for active families. \
       This handsome boy has amazing coloring and temperament.",
    )
    .with_images([
      "/attached_assets/blaze-1.jpg",
      "/attached_assets/blaze-2.jpg",
      "/attached_assets/blaze-3.jpg",
      "/attached_assets/blaze-4.jpg",
      "/attached_assets/blaze-5.jpg",
      "/attached_assets/blaze-6.jpg",
    ]),
    NewPuppy::new(
      "Scout",
      "American Pit Bull Terrier",
      "7 weeks old",
      "10 lbs",
      Gender::Female,
      2800,
      "Brown and White",
    )
    .with_description(
      "Gentle female puppy with calm temperament. Perfect for families with young children. \
       Beautiful markings and sweet personality.",
    )
    .with_images([
      "/attached_assets/scout-1.jpg",
      "/attached_assets/scout-2.jpg",
      "/attached_assets/scout-3.jpg",
      "/attached_assets/scout-4.jpg",
    ]),
  ]
}
