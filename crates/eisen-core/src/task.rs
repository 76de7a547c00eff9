use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quadrant::Quadrant;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub uuid: Uuid,
    pub title: String,
    pub due: NaiveDate,
    pub quadrant: Quadrant,
}

impl Task {
    pub fn new(title: String, due: NaiveDate) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            title,
            due,
            quadrant: Quadrant::default(),
        }
    }
}
