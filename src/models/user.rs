use serde::{Deserialize, Serialize};

/// Rol del usuario simulado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Osc,
    Empresa,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Osc => "osc",
            UserRole::Empresa => "empresa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "osc" => Some(UserRole::Osc),
            "empresa" => Some(UserRole::Empresa),
            _ => None,
        }
    }

    /// Clasificación simulada por subcadena del email.
    /// Sensible a mayúsculas y sin normalizar: "osc" o "ong" => OSC.
    pub fn from_email(email: &str) -> Self {
        if email.contains("osc") || email.contains("ong") {
            UserRole::Osc
        } else {
            UserRole::Empresa
        }
    }
}

/// Instantánea de la sesión guardada en storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub email: Option<String>,
    pub name: Option<String>,
    /// Texto tal cual fue guardado (el registro no lo valida)
    pub user_type: Option<String>,
}

impl UserSession {
    pub fn role(&self) -> Option<UserRole> {
        self.user_type.as_deref().and_then(UserRole::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_substring_decides_role() {
        assert_eq!(UserRole::from_email("team@osc.org"), UserRole::Osc);
        assert_eq!(UserRole::from_email("contato@ong-verde.br"), UserRole::Osc);
        assert_eq!(UserRole::from_email("biz@co.com"), UserRole::Empresa);
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(UserRole::from_email("TEAM@OSC.ORG"), UserRole::Empresa);
        assert_eq!(UserRole::from_email("x@Ong.org"), UserRole::Empresa);
    }

    #[test]
    fn substring_can_match_inside_words() {
        // "hongo" contiene "ong"
        assert_eq!(UserRole::from_email("hongo@fungi.com"), UserRole::Osc);
    }

    #[test]
    fn session_role_ignores_unknown_user_type() {
        let session = UserSession {
            email: Some("a@b.c".to_string()),
            name: None,
            user_type: Some("admin".to_string()),
        };
        assert_eq!(session.role(), None);
    }
}
