use serde::{Deserialize, Serialize};
use std::fmt;

/// Valoración media de un artista en una escala de 0.0 a 5.0 con precisión fija.
///
/// Internamente se guarda como un entero (`u32`) en formato *fixed-point*
/// con 4 decimales de precisión:
///
/// - `0.0`  → `0`
/// - `4.8`  → `48000`
/// - `5.0`  → `50000`
///
/// Así dos valoraciones leídas de JSON comparan igual aunque vengan de `f32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rating(u32);

impl Rating {
  const SCALE_FACTOR: u32 = 10_000;
  const MAX_VALUE: u32 = 5 * Self::SCALE_FACTOR;

  /// Sin valoraciones. Es el valor por defecto al ingerir un registro sin `rating`.
  pub const ZERO: Rating = Rating(0);

  /// Crea una `Rating` a partir de un valor en coma flotante.
  ///
  /// Devuelve `None` fuera del rango `[0.0, 5.0]` (incluye `NaN`).
  pub fn new(value: f32) -> Option<Self> {
    if !(0.0..=5.0).contains(&value) {
      return None;
    }

    let scaled_value = (value * Self::SCALE_FACTOR as f32).round() as u32;

    if scaled_value > Self::MAX_VALUE {
      return None;
    }

    Some(Self(scaled_value))
  }

  pub fn as_f32(&self) -> f32 {
    self.0 as f32 / Self::SCALE_FACTOR as f32
  }

  /// Representación en estrellas: solo 5.0 llega a ★★★★★ (se usa `floor`).
  pub fn stars(&self) -> String {
    let full = (self.0 / Self::SCALE_FACTOR) as usize;
    let mut out = String::with_capacity(5 * 3);
    out.extend(std::iter::repeat_n('★', full));
    out.extend(std::iter::repeat_n('☆', 5 - full));
    out
  }
}

impl fmt::Display for Rating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:.1}", self.as_f32())
  }
}
