//! Conversion logic between DTOs and domain entities.

use crate::domain::{entity, value_object::ClockTime};
use crate::infrastructure::dto::chat as dto;
use crate::infrastructure::dto::websocket::TimeData;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::Chat> for dto::ChatDto {
    fn from(model: entity::Chat) -> Self {
        Self {
            id: model.id.into_string(),
            title: model.title.into_string(),
            creator_id: model.creator_id.into_string(),
            messages: model.messages.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<entity::Message> for dto::MessageDto {
    fn from(model: entity::Message) -> Self {
        Self {
            id: model.id.into_string(),
            text: model.text.into_string(),
            author: model.author.into_string(),
            time: model.time.to_string(),
        }
    }
}

// ========================================
// DTO → Domain Value Object
// ========================================

impl From<TimeData> for ClockTime {
    fn from(dto: TimeData) -> Self {
        ClockTime::new(dto.hr, dto.mins)
    }
}
