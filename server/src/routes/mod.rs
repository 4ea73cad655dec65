pub mod health;
pub mod population;
