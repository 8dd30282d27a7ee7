//! Known introspect collections and the subcommands exposing them.

pub mod agent;
pub mod controller;

use crate::core::collection::DescCollection;

/// A collection bound to a subcommand name
#[derive(Debug, Clone, Copy)]
pub struct CollectionCommand {
    pub name: &'static str,
    pub about: &'static str,
    pub desc: fn() -> DescCollection,
}

/// All collection subcommands, in help order
pub fn collection_commands() -> Vec<CollectionCommand> {
    vec![
        CollectionCommand { name: "agent-route", about: "Show routes on agent", desc: agent::desc_route },
        CollectionCommand { name: "agent-itf", about: "Show interfaces on agent", desc: agent::desc_itf },
        CollectionCommand { name: "agent-si", about: "Show service instances on agent", desc: agent::desc_si },
        CollectionCommand { name: "agent-vrf", about: "Show vrfs on agent", desc: agent::desc_vrf },
        CollectionCommand { name: "agent-peering", about: "Peering with controller on agent", desc: agent::desc_peering },
        CollectionCommand { name: "agent-vn", about: "Show virtual networks on agent", desc: agent::desc_vn },
        CollectionCommand { name: "agent-mpls", about: "Show mpls on agent", desc: agent::desc_mpls },
        CollectionCommand { name: "controller-ri", about: "Show routing instances on controller", desc: controller::desc_ri_summary },
        CollectionCommand { name: "controller-route", about: "Show routes on controller", desc: controller::desc_route },
        CollectionCommand {
            name: "controller-route-summary",
            about: "Show routes summary on controller",
            desc: controller::desc_route_summary,
        },
    ]
}

/// Look up a collection subcommand by name
pub fn find_command(name: &str) -> Option<CollectionCommand> {
    collection_commands().into_iter().find(|c| c.name == name)
}
