#[cfg(test)]
mod tests {
    use crate::{
        models::{Role, Session, SessionError},
        test::fixtures::{CLIENT_ID, admin_session, client_session},
    };

    #[test]
    fn client_defaults_to_own_account() {
        assert_eq!(client_session().resolve_client(None), Ok(CLIENT_ID));
        assert_eq!(client_session().resolve_client(Some(CLIENT_ID)), Ok(CLIENT_ID));
    }

    #[test]
    fn client_cannot_read_other_accounts() {
        assert_eq!(
            client_session().resolve_client(Some(99)),
            Err(SessionError::Forbidden {
                username: "alice".to_string(),
                requested: 99
            })
        );
    }

    #[test]
    fn unlinked_client_is_rejected() {
        let session = Session::new("bob".to_string(), "pw".to_string(), Role::Client, None);
        assert_eq!(
            session.resolve_client(None),
            Err(SessionError::Unlinked("bob".to_string()))
        );
    }

    #[test]
    fn admin_must_pick_a_client() {
        assert_eq!(admin_session().resolve_client(Some(99)), Ok(99));
        assert_eq!(
            admin_session().resolve_client(None),
            Err(SessionError::ClientRequired("root".to_string()))
        );
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("CLIENT".parse::<Role>().unwrap(), Role::Client);
    }

    #[test]
    fn debug_hides_password() {
        let debug = format!("{:?}", client_session());
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret"));
    }
}
