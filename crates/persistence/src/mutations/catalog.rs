// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::EntityKind;
use crate::{CatalogStore, PersistenceError, to_values};
use cinebook_domain::Movie;
use tracing::info;

impl CatalogStore {
    /// Replaces the whole movie list.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn replace_movies(&self, movies: Vec<Movie>) -> Result<(), PersistenceError> {
        let mut catalog = self.write_catalog()?;
        self.backend
            .replace_all(EntityKind::Movies, to_values(&movies)?)?;
        info!(count = movies.len(), "Replaced movie list");
        catalog.movies = movies;
        Ok(())
    }
}
