use uuid::Uuid;

use crate::models::RawId;

/// Convierte un id de fichero en un `Uuid` estable.
///
/// Un UUID válido se respeta; cualquier otro valor produce un UUID v5
/// derivado de `kind` y del valor, igual en cada ejecución.
pub fn resolve(kind: &str, raw: Option<&RawId>, index: usize) -> Uuid {
  let key = match raw {
    Some(RawId::Text(text)) => {
      if let Ok(uuid) = Uuid::parse_str(text) {
        return uuid;
      }
      format!("{kind}-{text}")
    }
    Some(RawId::Number(n)) => format!("{kind}-{n}"),
    None => format!("{kind}-row-{index}"),
  };
  Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
}
