//! Request Builder
//!
//! Holds the activated field modules and drives extraction in activation
//! order. Building consumes the builder, so a spent builder cannot accept
//! further activations.

use tracing::{debug, info, warn};

use crate::domain::ValidationError;
use crate::domain::options::{OptionDescriptor, RawInput};
use crate::domain::order_request::{OrderRequest, OrderType};

use super::catalogue::FieldModule;
use super::presets;

/// An activated module and the options it declared.
#[derive(Debug, Clone)]
struct Registration {
    module: FieldModule,
    descriptors: Vec<OptionDescriptor>,
}

/// Assembles one [`OrderRequest`] from activated field modules.
#[derive(Debug, Clone, Default)]
pub struct OrderRequestBuilder {
    registrations: Vec<Registration>,
}

impl OrderRequestBuilder {
    /// Create a builder with no modules activated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the modules `order_type` accepts.
    #[must_use]
    pub fn for_order_type(order_type: OrderType) -> Self {
        Self::for_order_type_with(order_type, |module| module)
    }

    /// Create a builder with the modules `order_type` accepts, each passed
    /// through `adjust` before activation.
    #[must_use]
    pub fn for_order_type_with(
        order_type: OrderType,
        adjust: impl Fn(FieldModule) -> FieldModule,
    ) -> Self {
        presets::field_modules(order_type)
            .into_iter()
            .map(adjust)
            .fold(Self::new(), Self::with)
    }

    /// Activate `module`, consuming and returning the builder.
    #[must_use]
    pub fn with(mut self, module: FieldModule) -> Self {
        self.activate(module);
        self
    }

    /// Activate `module`, registering its options and its extractor.
    ///
    /// Activating the same catalogue entry twice is a caller error. The
    /// repeat is ignored, so each request key is written at most once, and
    /// the first activation's configuration wins: activating
    /// `time_in_force()` then `time_in_force_of([Fok])` accepts every time in
    /// force, while the reverse order accepts only FOK.
    pub fn activate(&mut self, module: FieldModule) -> &mut Self {
        if self
            .registrations
            .iter()
            .any(|r| r.module.same_entry(&module))
        {
            warn!(module = module.name(), "Field module already activated; ignoring");
            return self;
        }

        let descriptors = module.descriptors();
        debug!(
            module = module.name(),
            options = descriptors.len(),
            "Activated field module"
        );
        self.registrations.push(Registration {
            module,
            descriptors,
        });
        self
    }

    /// Options declared by every activated module, in activation order.
    pub fn descriptors(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.registrations.iter().flat_map(|r| r.descriptors.iter())
    }

    /// Activated modules, in activation order.
    pub fn modules(&self) -> impl Iterator<Item = &FieldModule> {
        self.registrations.iter().map(|r| &r.module)
    }

    /// Returns true if `module`'s catalogue entry is activated.
    #[must_use]
    pub fn is_active(&self, module: &FieldModule) -> bool {
        self.modules().any(|m| m.same_entry(module))
    }

    /// Run every activated module's extractor against `input`.
    ///
    /// The first validation failure stops the build; fields written by
    /// earlier modules are discarded with the partial request.
    pub fn build(self, input: &RawInput) -> Result<OrderRequest, ValidationError> {
        let mut request = OrderRequest::new();

        for registration in &self.registrations {
            registration.module.extract(input, &mut request).inspect_err(|e| {
                debug!(module = registration.module.name(), error = %e, "Extraction failed");
            })?;
        }

        info!(fields = ?request.keys(), "Order request built");
        Ok(request)
    }
}
