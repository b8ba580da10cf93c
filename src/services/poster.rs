use crate::models::Movie;

/// Rewrites relative poster paths into absolute image CDN URLs.
///
/// `Some(p)` becomes `Some("{base}/{size}{p}")`, `None` stays `None`.
/// Applied exactly once, at the gateway.
#[derive(Debug, Clone)]
pub struct PosterDecorator {
    image_base: String,
    size: String,
}

impl PosterDecorator {
    pub fn new(image_base: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            image_base: image_base.into().trim_end_matches('/').to_string(),
            size: size.into(),
        }
    }

    pub fn decorate_path(&self, path: Option<String>) -> Option<String> {
        path.map(|p| format!("{}/{}{}", self.image_base, self.size, p))
    }

    pub fn decorate(&self, mut movie: Movie) -> Movie {
        movie.poster_path = self.decorate_path(movie.poster_path.take());
        movie
    }

    pub fn decorate_all(&self, movies: Vec<Movie>) -> Vec<Movie> {
        movies.into_iter().map(|m| self.decorate(m)).collect()
    }
}

impl Default for PosterDecorator {
    fn default() -> Self {
        Self::new("https://image.tmdb.org/t/p", "w500")
    }
}
