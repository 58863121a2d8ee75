use actix_session::Session;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::models::{error::APIError, profile::UserRole};

const CURRENT_USER_KEY: &str = "current_user";

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub role: UserRole,
}

impl SessionUser {
    pub fn new(id: Uuid, role: UserRole) -> Self {
        SessionUser { id, role }
    }

    pub fn require_admin(&self) -> Result<(), APIError> {
        if self.role != UserRole::Admin {
            return Err(APIError::Forbidden);
        }

        Ok(())
    }
}

pub fn is_authenticated(session: &Session) -> bool {
    let user = session.get::<SessionUser>(CURRENT_USER_KEY);
    if let Ok(user) = user {
        return user.is_some();
    }
    return false;
}

// The session cookie is the whole of the login state: a stored user id is
// enough, nothing expires it server side.
pub fn get_current_user(session: &Session) -> Result<SessionUser, APIError> {
    let user = session
        .get::<SessionUser>(CURRENT_USER_KEY)
        .map_err(|_error| APIError::Unauthorized)?;

    if let Some(user) = user {
        return Ok(user);
    }

    Err(APIError::Unauthorized)
}

pub fn set_current_user(session: &Session, user: &SessionUser) -> Result<(), actix_web::Error> {
    session.set(CURRENT_USER_KEY, user)?;

    Ok(())
}

pub fn remove_current_user(session: &Session) -> () {
    session.remove(CURRENT_USER_KEY)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_require_admin() {
        let admin = SessionUser::new(Uuid::new_v4(), UserRole::Admin);
        assert!(admin.require_admin().is_ok());

        let member = SessionUser::new(Uuid::new_v4(), UserRole::Member);
        let result = member.require_admin();
        assert!(matches!(result, Err(APIError::Forbidden)));
    }
}
