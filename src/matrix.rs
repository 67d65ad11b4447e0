//! A distance matrix request and its loaded grid of routes.

use tracing::info;

use crate::client::MatrixResponse;
use crate::config::Configuration;
use crate::errors::Error;
use crate::places::Places;
use crate::route::Route;
use crate::routes_finder::RoutesFinder;
use crate::traits::MatrixClient;
use crate::url_builder::UrlBuilder;

/// Origins × destinations request against the matrix API.
///
/// Rows of the loaded grid follow the origins in order; elements within a
/// row follow the destinations. Data is fetched once and memoized until
/// [`Matrix::reset`] or [`Matrix::reload`].
#[derive(Debug, Clone)]
pub struct Matrix {
    origins: Places,
    destinations: Places,
    configuration: Configuration,
    data: Option<Vec<Vec<Route>>>,
}

impl Matrix {
    pub fn new(origins: Places, destinations: Places) -> Self {
        Self::with_configuration(origins, destinations, Configuration::default())
    }

    pub fn with_configuration(
        origins: Places,
        destinations: Places,
        configuration: Configuration,
    ) -> Self {
        Self {
            origins,
            destinations,
            configuration,
            data: None,
        }
    }

    pub fn origins(&self) -> &Places {
        &self.origins
    }

    pub fn destinations(&self) -> &Places {
        &self.destinations
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Adjusts the configuration in place.
    pub fn configure(&mut self, configure: impl FnOnce(&mut Configuration)) {
        configure(&mut self.configuration);
    }

    /// A matrix is valid when it has at least one origin and one
    /// destination. Never silently corrected; the reasons are reported.
    pub fn validate(&self) -> Result<(), Error> {
        let mut reasons = Vec::new();
        if self.origins.is_empty() {
            reasons.push("must have at least one origin");
        }
        if self.destinations.is_empty() {
            reasons.push("must have at least one destination");
        }

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidMatrix(reasons.join(", ")))
        }
    }

    /// The URL the API gets called with, including credentials. Sensitive.
    pub fn sensitive_url(&self) -> Result<String, Error> {
        UrlBuilder::new(self)?.sensitive_url()
    }

    /// The request URL with sensitive params masked, safe to log.
    pub fn filtered_url(&self) -> Result<String, Error> {
        UrlBuilder::new(self)?.filtered_url()
    }

    /// The loaded grid, fetching it through `client` on first access.
    pub fn data<C: MatrixClient>(&mut self, client: &C) -> Result<&[Vec<Route>], Error> {
        if self.data.is_none() {
            self.data = Some(self.load(client)?);
        }

        Ok(self.data.as_deref().unwrap_or_default())
    }

    /// Drops any loaded grid and fetches a fresh one.
    pub fn reload<C: MatrixClient>(&mut self, client: &C) -> Result<&[Vec<Route>], Error> {
        self.data = Some(self.load(client)?);
        Ok(self.data.as_deref().unwrap_or_default())
    }

    pub fn reset(&mut self) {
        self.data = None;
    }

    pub fn loaded(&self) -> bool {
        self.data.is_some()
    }

    /// Lookup view over the loaded grid; fails when nothing is loaded yet.
    pub fn finder(&self) -> Result<RoutesFinder<'_>, Error> {
        match &self.data {
            Some(data) => Ok(RoutesFinder::new(
                &self.origins,
                &self.destinations,
                &self.configuration,
                data,
            )),
            None => Err(Error::MatrixNotLoaded),
        }
    }

    fn load<C: MatrixClient>(&self, client: &C) -> Result<Vec<Vec<Route>>, Error> {
        let builder = UrlBuilder::new(self)?;
        let url = builder.sensitive_url()?;

        info!(
            elements = self.origins.len() * self.destinations.len(),
            url = %builder.filtered_url()?,
            "loading distance matrix"
        );

        let response = client.get_matrix(&url, &self.configuration)?;
        self.routes_from_response(response)
    }

    fn routes_from_response(&self, response: MatrixResponse) -> Result<Vec<Vec<Route>>, Error> {
        if response.rows.len() != self.origins.len() {
            return Err(Error::UnexpectedResponse(format!(
                "expected {} rows, got {}",
                self.origins.len(),
                response.rows.len()
            )));
        }

        response
            .rows
            .into_iter()
            .zip(self.origins.iter())
            .map(|(row, origin)| {
                if row.elements.len() != self.destinations.len() {
                    return Err(Error::UnexpectedResponse(format!(
                        "expected {} elements per row, got {}",
                        self.destinations.len(),
                        row.elements.len()
                    )));
                }

                Ok(row
                    .elements
                    .into_iter()
                    .zip(self.destinations.iter())
                    .map(|(element, destination)| {
                        Route::from_element(element, origin.clone(), destination.clone())
                    })
                    .collect())
            })
            .collect()
    }
}
