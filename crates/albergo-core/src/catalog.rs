//! # Service Catalog
//!
//! Optional add-ons charged per day of a stay. Fixed at startup.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Service;
use crate::validation::{validate_price_cents, validate_service_name};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<Arc<Service>>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate names and negative prices.
    pub fn new(services: Vec<Service>) -> CoreResult<Self> {
        let mut checked: Vec<Arc<Service>> = Vec::with_capacity(services.len());

        for service in services {
            validate_service_name(&service.name)?;
            validate_price_cents("price per day", service.price_per_day_cents)?;

            if checked.iter().any(|s| s.name == service.name) {
                return Err(ValidationError::Duplicate {
                    field: "service name".to_string(),
                    value: service.name,
                }
                .into());
            }
            checked.push(Arc::new(service));
        }

        Ok(Catalog { services: checked })
    }

    /// The default add-ons and their daily prices.
    pub fn standard() -> Self {
        let services = [
            ("Breakfast", 15),
            ("Parking", 8),
            ("Spa", 35),
            ("WiFi", 5),
            ("Pool", 15),
        ];

        Catalog {
            services: services
                .into_iter()
                .map(|(name, euros)| Arc::new(Service::new(name, Money::from_euros(euros))))
                .collect(),
        }
    }

    pub fn services(&self) -> &[Arc<Service>] {
        &self.services
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Service>> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Resolves a list of names to catalog entries.
    ///
    /// Repeated names collapse to one entry: a service is either on a stay
    /// or not. Any unknown name fails the whole lookup.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> CoreResult<Vec<Arc<Service>>> {
        let mut resolved: Vec<Arc<Service>> = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            let service = self
                .get(name)
                .ok_or_else(|| CoreError::ServiceNotFound(name.to_string()))?;
            if !resolved.iter().any(|s| Arc::ptr_eq(s, service)) {
                resolved.push(Arc::clone(service));
            }
        }

        Ok(resolved)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
