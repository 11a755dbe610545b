use artistly_core::onboarding::ProfileImage;
use std::io;
use std::path::Path;

fn content_type_for(path: &Path) -> Option<&'static str> {
  let ext = path.extension()?.to_str()?.to_ascii_lowercase();
  match ext.as_str() {
    "jpg" | "jpeg" => Some("image/jpeg"),
    "png" => Some("image/png"),
    "gif" => Some("image/gif"),
    "webp" => Some("image/webp"),
    _ => None,
  }
}

/// Lee la foto de perfil del disco. El contenido no se interpreta.
pub async fn load_profile_image(path: &Path) -> io::Result<ProfileImage> {
  let bytes = tokio::fs::read(path).await?;
  let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

  let image = ProfileImage::new(file_name, bytes);
  Ok(match content_type_for(path) {
    Some(ct) => image.with_content_type(ct),
    None => image,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn content_type_comes_from_extension() {
    assert_eq!(content_type_for(Path::new("me.JPG")), Some("image/jpeg"));
    assert_eq!(content_type_for(Path::new("me.webp")), Some("image/webp"));
    assert_eq!(content_type_for(Path::new("notes.txt")), None);
    assert_eq!(content_type_for(Path::new("noext")), None);
  }

  #[tokio::test]
  async fn reads_bytes_and_file_name() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("avatar.png");
    std::fs::write(&path, [1u8, 2, 3]).unwrap();

    let image = load_profile_image(&path).await.unwrap();

    assert_eq!(image.file_name, "avatar.png");
    assert_eq!(image.content_type.as_deref(), Some("image/png"));
    assert_eq!(image.size_bytes(), 3);
  }
}
