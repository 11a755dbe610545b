use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Define un identificador opaco sobre `Uuid` con la misma API para todas
/// las entidades (`new`, `from_uuid`, `derived`, `as_uuid`, conversiones).
macro_rules! uuid_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct $name(Uuid);

    impl $name {
      /// Genera un nuevo identificador único (UUID v4).
      pub fn new() -> Self {
        $name(Uuid::new_v4())
      }

      pub fn from_uuid(u: Uuid) -> Self {
        $name(u)
      }

      /// Identificador determinista (UUID v5) a partir de una clave estable.
      ///
      /// Se usa al ingerir datos semilla sin id propio: la misma clave produce
      /// siempre el mismo id entre ejecuciones.
      pub fn derived(key: &str) -> Self {
        $name(Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()))
      }

      pub fn as_uuid(&self) -> Uuid {
        self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<Uuid> for $name {
      fn from(u: Uuid) -> Self {
        $name(u)
      }
    }

    impl From<$name> for Uuid {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

uuid_id!(
  /// Identificador de un artista del catálogo.
  ArtistId
);

uuid_id!(
  /// Identificador de una solicitud de alta recibida.
  SubmissionId
);

uuid_id!(
  /// Identificador de una petición de contratación.
  BookingId
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn derived_ids_are_stable_per_key() {
    assert_eq!(ArtistId::derived("artist-1"), ArtistId::derived("artist-1"));
    assert_ne!(ArtistId::derived("artist-1"), ArtistId::derived("artist-2"));
  }
}
