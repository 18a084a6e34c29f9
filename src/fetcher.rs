pub mod downloader;
pub mod index;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::fs;
use tracing::{info, instrument};

pub use downloader::{Fetch, HttpFetcher};
pub use index::{image_name, image_src, index_html};

pub static INDEX_FILE: &str = "index.html";

/// Downloads `urls` in order into `dest_dir/img0`, `img1`, ... and writes an
/// `index.html` showing them. The first failed download aborts the run and
/// leaves no index behind.
#[instrument(skip_all, fields(dest = %dest_dir.display(), count = urls.len()))]
pub async fn download_images<F: Fetch>(
    fetcher: &F,
    urls: &[String],
    dest_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dest_dir)
        .await
        .map_err(|e| anyhow::anyhow!("failed to create {}: {}", dest_dir.display(), e))?;

    let mut written = Vec::with_capacity(urls.len());
    let mut srcs = Vec::with_capacity(urls.len());

    for (index, url) in urls.iter().enumerate() {
        let image_path = dest_dir.join(image_name(index));
        info!("Retrieving file: {}", image_path.display());

        let image_bytes = fetcher.fetch(url).await?;
        fs::write(&image_path, &image_bytes)
            .await
            .map_err(|e| anyhow::anyhow!("failed to save {}: {}", image_path.display(), e))?;

        srcs.push(image_src(dest_dir, index));
        written.push(image_path);
    }

    let index_path = dest_dir.join(INDEX_FILE);
    fs::write(&index_path, index_html(&srcs))
        .await
        .map_err(|e| anyhow::anyhow!("failed to write {}: {}", index_path.display(), e))?;
    info!("index written to {}", index_path.display());

    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bytes::Bytes;

    use super::*;

    struct StubFetcher(HashMap<String, Bytes>);

    impl Fetch for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<Bytes> {
            self.0
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("download failed {}: 404 Not Found", url))
        }
    }

    fn stub(pairs: &[(&str, &str)]) -> StubFetcher {
        StubFetcher(
            pairs
                .iter()
                .map(|(url, body)| (url.to_string(), Bytes::copy_from_slice(body.as_bytes())))
                .collect(),
        )
    }

    const A: &str = "https://mirror.example.com/puzzle/p-hello-aaaa.jpg";
    const Z: &str = "https://mirror.example.com/puzzle/p-hello-zzzz.jpg";

    #[tokio::test]
    async fn writes_images_and_index() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("nested").join("out");
        let fetcher = stub(&[(A, "first"), (Z, "second")]);

        let written = download_images(&fetcher, &[A.to_owned(), Z.to_owned()], &dest)
            .await
            .unwrap();

        assert_eq!(written, vec![dest.join("img0"), dest.join("img1")]);
        assert_eq!(std::fs::read(dest.join("img0")).unwrap(), b"first");
        assert_eq!(std::fs::read(dest.join("img1")).unwrap(), b"second");

        let html = std::fs::read_to_string(dest.join(INDEX_FILE)).unwrap();
        let first = html.find(&image_src(&dest, 0)).unwrap();
        let second = html.find(&image_src(&dest, 1)).unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<img ").count(), 2);
    }

    #[tokio::test]
    async fn existing_dir_and_index_are_reused() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().to_path_buf();
        std::fs::write(dest.join(INDEX_FILE), "stale").unwrap();

        download_images(&stub(&[(A, "a")]), &[A.to_owned()], &dest)
            .await
            .unwrap();

        let html = std::fs::read_to_string(dest.join(INDEX_FILE)).unwrap();
        assert!(!html.contains("stale"));
        assert_eq!(html.matches("<img ").count(), 1);
    }

    #[tokio::test]
    async fn failed_download_aborts_before_index() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("out");
        let fetcher = stub(&[(A, "a")]);

        let err = download_images(&fetcher, &[A.to_owned(), Z.to_owned()], &dest)
            .await
            .unwrap_err();

        assert!(err.to_string().contains(Z));
        assert!(dest.join("img0").exists());
        assert!(!dest.join("img1").exists());
        assert!(!dest.join(INDEX_FILE).exists());
    }

    #[tokio::test]
    async fn no_urls_still_writes_index() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("empty");

        let written = download_images(&stub(&[]), &[], &dest).await.unwrap();

        assert!(written.is_empty());
        assert_eq!(
            std::fs::read_to_string(dest.join(INDEX_FILE)).unwrap(),
            index_html(&[])
        );
    }
}
