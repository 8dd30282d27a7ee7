//! Collections served by the controller introspect.

use crate::core::collection::{DescCollection, DescElement, Element, LongFormatter, PageRequest};
use crate::core::query::{pretty, select_strings};
use crate::core::render::DetailTable;
use crate::core::source::{Sourcer, Webui};
use crate::domain::error::IntrospectResult;

fn webui(request: &PageRequest<'_>, path: String) -> Box<dyn Sourcer> {
    Box::new(Webui::new(request.arg(0), request.ports.controller, path))
}

pub fn desc_ri_summary() -> DescCollection {
    DescCollection {
        page_args: vec!["controller-fqdn"],
        page_builder: |req| webui(req, "Snh_ShowRoutingInstanceSummaryReq?search_string=".to_string()),
        base_xpath: "ShowRoutingInstanceSummaryResp/instances/list",
        desc_elt: DescElement {
            short_detail_xpath: "name/text()",
            long_detail: LongFormatter::Xpaths(vec!["name", "virtual_network"]),
        },
        primary_field: "name",
    }
}

pub fn desc_route_summary() -> DescCollection {
    DescCollection {
        page_args: vec!["controller-fqdn", "search"],
        page_builder: |req| {
            webui(req, format!("Snh_ShowRouteSummaryReq?search_string={}", req.arg(1)))
        },
        base_xpath: "ShowRouteSummaryResp/tables/list",
        desc_elt: DescElement {
            short_detail_xpath: "name/text()",
            long_detail: LongFormatter::Xpaths(vec![
                "name",
                "prefixes",
                "paths",
                "primary_paths",
                "secondary_paths",
                "pending_updates",
            ]),
        },
        primary_field: "name",
    }
}

pub fn desc_route() -> DescCollection {
    DescCollection {
        page_args: vec!["controller-fqdn", "routing-instance"],
        page_builder: |req| webui(req, format!("Snh_ShowRouteReq?x={}.inet.0", req.arg(1))),
        base_xpath: "ShowRouteResp/tables/list/ShowRouteTable/routes/list",
        desc_elt: DescElement {
            short_detail_xpath: "prefix/text()",
            long_detail: LongFormatter::Fn(route_path),
        },
        primary_field: "prefix",
    }
}

fn route_path(t: &mut DetailTable, e: &Element<'_>) -> IntrospectResult<()> {
    t.add_row([format!("Prefix {}", e.field("prefix")?)]);

    t.add_row(["    Protocol", "Nexthop", "Local Pref", "Peers", "MPLS label"]);
    for path in e.select("paths/list/ShowRoutePath")? {
        let protocol = select_strings(path, "protocol/text()")?;
        let nhs = select_strings(path, "next_hop/text()")?;
        let peers = select_strings(path, "source/text()")?;
        let label = select_strings(path, "label/text()")?;
        let local_pref = select_strings(path, "local_preference/text()")?;
        t.add_row([
            format!("    {}", pretty(&protocol)),
            pretty(&nhs),
            pretty(&local_pref),
            pretty(&peers),
            pretty(&label),
        ]);
    }
    t.add_row([""]);
    Ok(())
}
