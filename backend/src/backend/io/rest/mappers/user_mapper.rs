use super::timestamp_to_wire;
use crate::backend::domain::models::user::User as DomainUser;
use shared::{LoginResponse, User as SharedUser};

pub struct UserMapper;

impl UserMapper {
    pub fn to_dto(domain: DomainUser) -> SharedUser {
        SharedUser {
            id: domain.id,
            email: domain.email,
            name: domain.name,
            created_at: timestamp_to_wire(domain.created_at),
            is_verified: domain.is_verified,
        }
    }

    pub fn to_login_response(domain: DomainUser) -> LoginResponse {
        LoginResponse {
            user: Self::to_dto(domain),
        }
    }
}
