use std::path::{Path, PathBuf};

static INDEX_HEAD: &str = "<html>\n<body>\n";
static INDEX_TAIL: &str = "</body>\n</html>\n";

/// File name of the `index`-th downloaded image.
pub fn image_name(index: usize) -> String {
    format!("img{}", index)
}

/// `src` for the `index`-th image, relative to the page inside `dest_dir`.
pub fn image_src(dest_dir: &Path, index: usize) -> String {
    let dest_dir: PathBuf = dest_dir.components().collect();
    format!("../{}/{}", dest_dir.display(), image_name(index))
}

pub fn index_html(srcs: &[String]) -> String {
    let mut html = String::from(INDEX_HEAD);
    for src in srcs {
        html.push_str(&format!("<img src=\"{}\"/>\n", src));
    }
    html.push_str(INDEX_TAIL);
    html
}
