//! Fixed-size spacing primitive.

use askama::Template;

/// Inserts a square block of empty space, `size` pixels on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Template)]
#[template(path = "components/spacer.html")]
pub struct Spacer {
    pub size: u32,
}

impl Spacer {
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self { size }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fixed_size() {
        let html = Spacer::new(12).render().unwrap();
        assert!(html.contains("display: block"));
        assert!(html.contains("width: 12px"));
        assert!(html.contains("min-height: 12px"));
    }
}
