use serde::Serialize;
use std::fmt;

use crate::core::constants::dataset::{MAX_DAY, MIN_DAY};

/// A single synthetic participant record.
///
/// Records are created once by the dataset generator and never mutated
/// afterwards; filtering produces borrowed views, not copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    /// Unique id, assigned sequentially starting at 1
    pub id: u32,
    /// Display name, derived from the id
    pub name: String,
    /// College the participant represents
    pub college: String,
    /// Home state of the college
    pub state: String,
    /// Event the participant registered for
    pub event: String,
    /// Festival day of the event (1-5)
    pub day: u8,
    /// Free-text feedback left after the event
    pub feedback: String,
}

/// Builder for creating `Participant` instances with validation.
#[derive(Debug, Default)]
pub struct ParticipantBuilder {
    id: Option<u32>,
    college: Option<String>,
    state: Option<String>,
    event: Option<String>,
    day: Option<u8>,
    feedback: Option<String>,
}

/// Errors that can occur when building a `Participant`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantError {
    /// Id is missing or zero
    InvalidId,
    /// College is missing or empty
    MissingCollege,
    /// State is missing or empty
    MissingState,
    /// Event is missing or empty
    MissingEvent,
    /// Day is missing or outside the festival range
    InvalidDay,
    /// Feedback is missing or empty
    MissingFeedback,
}

impl fmt::Display for ParticipantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "Id is required and must be greater than 0"),
            Self::MissingCollege => write!(f, "College is required and cannot be empty"),
            Self::MissingState => write!(f, "State is required and cannot be empty"),
            Self::MissingEvent => write!(f, "Event is required and cannot be empty"),
            Self::InvalidDay => write!(f, "Day must be between {MIN_DAY} and {MAX_DAY}"),
            Self::MissingFeedback => write!(f, "Feedback is required and cannot be empty"),
        }
    }
}

impl std::error::Error for ParticipantError {}

impl Participant {
    /// Create a new Participant with validation.
    ///
    /// The name is derived from the id, so it cannot drift out of sync.
    ///
    /// # Examples
    /// ```
    /// use festdash::core::types::Participant;
    ///
    /// let p = Participant::new(
    ///     7,
    ///     "IIT Bombay".to_string(),
    ///     "Maharashtra".to_string(),
    ///     "Chess".to_string(),
    ///     3,
    ///     "Loved it".to_string(),
    /// ).unwrap();
    /// assert_eq!(p.name, "Participant_7");
    /// assert_eq!(p.day, 3);
    /// ```
    pub fn new(
        id: u32,
        college: String,
        state: String,
        event: String,
        day: u8,
        feedback: String,
    ) -> Result<Self, ParticipantError> {
        if id == 0 {
            return Err(ParticipantError::InvalidId);
        }
        if college.trim().is_empty() {
            return Err(ParticipantError::MissingCollege);
        }
        if state.trim().is_empty() {
            return Err(ParticipantError::MissingState);
        }
        if event.trim().is_empty() {
            return Err(ParticipantError::MissingEvent);
        }
        if !(MIN_DAY..=MAX_DAY).contains(&day) {
            return Err(ParticipantError::InvalidDay);
        }
        if feedback.trim().is_empty() {
            return Err(ParticipantError::MissingFeedback);
        }

        Ok(Self {
            id,
            name: format!("Participant_{id}"),
            college,
            state,
            event,
            day,
            feedback,
        })
    }

    /// Create a builder for constructing Participant instances.
    pub fn builder() -> ParticipantBuilder {
        ParticipantBuilder::default()
    }
}

impl ParticipantBuilder {
    /// Set the participant id.
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the college.
    pub fn college<S: Into<String>>(mut self, college: S) -> Self {
        self.college = Some(college.into());
        self
    }

    /// Set the state.
    pub fn state<S: Into<String>>(mut self, state: S) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Set the event.
    pub fn event<S: Into<String>>(mut self, event: S) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the festival day.
    pub fn day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    /// Set the feedback text.
    pub fn feedback<S: Into<String>>(mut self, feedback: S) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    /// Build the Participant, validating all required fields.
    pub fn build(self) -> Result<Participant, ParticipantError> {
        let id = self.id.ok_or(ParticipantError::InvalidId)?;
        let college = self.college.ok_or(ParticipantError::MissingCollege)?;
        let state = self.state.ok_or(ParticipantError::MissingState)?;
        let event = self.event.ok_or(ParticipantError::MissingEvent)?;
        let day = self.day.ok_or(ParticipantError::InvalidDay)?;
        let feedback = self.feedback.ok_or(ParticipantError::MissingFeedback)?;

        Participant::new(id, college, state, event, day, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Participant {
        Participant::new(
            7,
            "IIT Bombay".to_string(),
            "Maharashtra".to_string(),
            "Chess".to_string(),
            3,
            "Loved it".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_participant_creation() {
        let p = sample();
        assert_eq!(p.id, 7);
        assert_eq!(p.name, "Participant_7");
        assert_eq!(p.college, "IIT Bombay");
        assert_eq!(p.state, "Maharashtra");
        assert_eq!(p.event, "Chess");
        assert_eq!(p.day, 3);
        assert_eq!(p.feedback, "Loved it");
    }

    #[test]
    fn test_participant_creation_validation() {
        let result = Participant::new(
            0,
            "IIT Bombay".to_string(),
            "Maharashtra".to_string(),
            "Chess".to_string(),
            3,
            "Loved it".to_string(),
        );
        assert!(matches!(result, Err(ParticipantError::InvalidId)));

        let result = Participant::new(
            1,
            "".to_string(),
            "Maharashtra".to_string(),
            "Chess".to_string(),
            3,
            "Loved it".to_string(),
        );
        assert!(matches!(result, Err(ParticipantError::MissingCollege)));

        let result = Participant::new(
            1,
            "IIT Bombay".to_string(),
            "Maharashtra".to_string(),
            "Chess".to_string(),
            6,
            "Loved it".to_string(),
        );
        assert!(matches!(result, Err(ParticipantError::InvalidDay)));

        let result = Participant::new(
            1,
            "IIT Bombay".to_string(),
            "Maharashtra".to_string(),
            "Chess".to_string(),
            0,
            "Loved it".to_string(),
        );
        assert!(matches!(result, Err(ParticipantError::InvalidDay)));
    }

    #[test]
    fn test_participant_name_derived_from_id() {
        for id in [1u32, 42, 250] {
            let p = Participant::new(
                id,
                "BIT Mesra".to_string(),
                "Jharkhand".to_string(),
                "Quiz".to_string(),
                1,
                "Awesome".to_string(),
            )
            .unwrap();
            assert_eq!(p.name, format!("Participant_{id}"));
        }
    }

    #[test]
    fn test_participant_builder() {
        let p = Participant::builder()
            .id(7)
            .college("IIT Bombay")
            .state("Maharashtra")
            .event("Chess")
            .day(3)
            .feedback("Loved it")
            .build()
            .unwrap();

        assert_eq!(p, sample());
    }

    #[test]
    fn test_participant_builder_missing_fields() {
        let result = Participant::builder().id(1).build();
        assert!(matches!(result, Err(ParticipantError::MissingCollege)));

        let result = Participant::builder()
            .college("BITS Pilani")
            .state("Rajasthan")
            .event("Music")
            .day(2)
            .feedback("Worth It")
            .build();
        assert!(matches!(result, Err(ParticipantError::InvalidId)));
    }

    #[test]
    fn test_participant_error_display() {
        assert_eq!(
            ParticipantError::InvalidDay.to_string(),
            "Day must be between 1 and 5"
        );
        assert_eq!(
            ParticipantError::MissingFeedback.to_string(),
            "Feedback is required and cannot be empty"
        );
    }

    #[test]
    fn test_participant_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "Participant_7");
        assert_eq!(json["day"], 3);
    }
}
