// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Synchronization of a circuit's conductor sets with its load and its
//! configuration.

use crate::catalog::Size;
use crate::entity::{Cable, Conductor, ConductorRole, Conduitable};
use crate::messages::ERROR_INVALID_LOAD;
use crate::voltage_system::SetLayout;
use crate::{Circuit, Load};

/// Conductor set synchronization.
impl<L> Circuit<L>
where
    L: Load,
{
    pub fn is_using_cable(&self) -> bool {
        self.using_cable
    }

    /// Switches between cables and insulated conductors, and rebuilds the
    /// sets accordingly.
    pub fn set_using_cable(&mut self, using_cable: bool) {
        if self.using_cable == using_cable {
            return;
        }
        self.using_cable = using_cable;
        self.synchronize();
        self.check_routing_practice();
    }

    /// Returns the phase A conductor that all the conductors of the circuit
    /// are derived from.
    pub fn conductor_template(&self) -> &Conductor {
        &self.conductor_template
    }

    /// Returns the cable that all the cables of the circuit are derived from.
    pub fn cable_template(&self) -> &Cable {
        &self.cable_template
    }

    /// Replaces the conductor template with a new conductor like the given
    /// one.  The template is always a hot conductor, whatever the role of the
    /// given one.
    pub fn set_conductor(&mut self, conductor: &Conductor) {
        let mut template = conductor.make_like();
        template.set_role(ConductorRole::Hot);
        self.conductor_template = template;
        if !self.using_cable {
            self.rebuild();
        }
    }

    /// Sets the size of the template, and of every conductor derived from it.
    pub fn set_conductor_size(&mut self, size: Size) {
        self.conductor_template.set_size(size);
        for entity in &mut self.active {
            if let Conduitable::Conductor(conductor) = entity {
                conductor.set_size(size);
            }
        }
        self.attach();
    }

    /// Replaces the cable template with a new cable like the given one.  Its
    /// conductors are replaced with the ones the voltage system of the load
    /// requires.
    pub fn set_cable(&mut self, cable: &Cable) {
        let mut template = cable.make_like();
        template.set_conductors(self.layout.roles());
        self.cable_template = template;
        if self.using_cable {
            self.rebuild();
        }
    }

    /// Returns the layout of each set, as derived from the load's voltage
    /// system.
    pub fn set_layout(&self) -> SetLayout {
        self.layout
    }

    /// Returns the number of conductors in each set, including the ground.
    pub fn conductors_per_set(&self) -> usize {
        self.layout.conductors_per_set()
    }

    /// Re-reads the load and rebuilds the active entities if they no longer
    /// match the shape the configuration requires.
    pub(super) fn synchronize(&mut self) {
        self.check_load();

        let layout = SetLayout::new(self.load.voltage_system(), &self.config);
        let layout_changed = layout != self.layout;
        if layout_changed {
            tracing::debug!(
                "Voltage system changed to {}: {} conductors per set.",
                self.load.voltage_system(),
                layout.conductors_per_set()
            );
            self.layout = layout;
            self.cable_template.set_conductors(layout.roles());
        }

        if layout_changed || !self.has_required_shape() {
            self.rebuild();
        }
    }

    pub(super) fn check_load(&mut self) {
        if self.load.is_valid() {
            self.messages.remove(ERROR_INVALID_LOAD.id());
        } else {
            self.record(&ERROR_INVALID_LOAD);
        }
    }

    /// Returns the role of each required entity, with `None` for cables.
    fn required_shape(&self) -> Vec<Option<ConductorRole>> {
        if self.using_cable {
            return vec![None; self.number_of_sets];
        }
        let roles = self.layout.roles();
        (0..self.sets_per_conduit)
            .flat_map(|_| roles.iter().map(|r| Some(*r)))
            .collect()
    }

    fn has_required_shape(&self) -> bool {
        self.active
            .iter()
            .map(Conduitable::role)
            .eq(self.required_shape())
    }

    /// Replaces the active entities with fresh copies of the templates,
    /// keeping the template itself as the first entity.
    pub(super) fn rebuild(&mut self) {
        self.detach();
        self.active = if self.using_cable {
            self.cable_sets()
        } else {
            self.conductor_sets()
        };
        self.attach();

        tracing::debug!(
            "Rebuilt {} {} for {} sets, {} per conduit.",
            self.active.len(),
            if self.using_cable { "cables" } else { "conductors" },
            self.number_of_sets,
            self.sets_per_conduit
        );
    }

    fn cable_sets(&self) -> Vec<Conduitable> {
        let template = &self.cable_template;
        std::iter::once(template.clone())
            .chain((1..self.number_of_sets).map(|_| template.make_like()))
            .map(Conduitable::from)
            .collect()
    }

    fn conductor_sets(&self) -> Vec<Conduitable> {
        let template = &self.conductor_template;
        let roles = self.layout.roles();
        let mut entities = Vec::with_capacity(roles.len() * self.sets_per_conduit);

        entities.push(Conduitable::from(template.clone()));
        for role in roles.iter().skip(1) {
            entities.push(template.make_like().with_role(*role).into());
        }
        for _ in 1..self.sets_per_conduit {
            for role in &roles {
                entities.push(template.make_like().with_role(*role).into());
            }
        }
        entities
    }
}
