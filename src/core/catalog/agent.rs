//! Collections served by the vrouter agent introspect.

use crate::core::collection::{DescCollection, DescElement, Element, LongFormatter, PageRequest};
use crate::core::query::{pretty, select_strings};
use crate::core::render::DetailTable;
use crate::core::source::{Page, Remote, Sourcer, Webui};
use crate::domain::error::IntrospectResult;
use sxd_xpath::nodeset::Node;

/// Routes of a VRF whose paths use a multicast nexthop list
pub const MULTIPLE_NEXTHOP_XPATH: &str = "//route_list/list/RouteUcSandeshData\
    [path_list/list/PathSandeshData/nh/NhSandeshData/mc_list]/src_ip/text()";

fn remote(request: &PageRequest<'_>, table: String) -> Box<dyn Sourcer> {
    Box::new(Remote::new(request.arg(0), request.ports.agent, table))
}

fn webui(request: &PageRequest<'_>, path: &str) -> Box<dyn Sourcer> {
    Box::new(Webui::new(request.arg(0), request.ports.agent, path))
}

fn route_table(vrf: &str) -> String {
    format!("{}.uc.route.0", vrf)
}

pub fn desc_route() -> DescCollection {
    DescCollection {
        page_args: vec!["vrouter-fqdn", "vrf-name"],
        page_builder: |req| remote(req, route_table(req.arg(1))),
        base_xpath: "__Inet4UcRouteResp_list/Inet4UcRouteResp/route_list/list",
        desc_elt: DescElement {
            short_detail_xpath: "src_ip/text()",
            long_detail: LongFormatter::Fn(route_detail),
        },
        primary_field: "src_ip",
    }
}

pub fn desc_itf() -> DescCollection {
    DescCollection {
        page_args: vec!["vrouter-fqdn"],
        page_builder: |req| remote(req, "db.interface.0".to_string()),
        base_xpath: "__ItfResp_list/ItfResp/itf_list/list",
        desc_elt: DescElement {
            short_detail_xpath: "name/text()",
            long_detail: LongFormatter::Xpaths(vec![
                "uuid",
                "name",
                "vrf_name",
                "vm_uuid",
                "ip_addr",
                "mdata_ip_addr",
            ]),
        },
        primary_field: "name",
    }
}

pub fn desc_si() -> DescCollection {
    DescCollection {
        page_args: vec!["vrouter-fqdn"],
        page_builder: |req| remote(req, "db.service-instance.0".to_string()),
        base_xpath: "__ServiceInstanceResp_list/ServiceInstanceResp/service_instance_list/list",
        desc_elt: DescElement {
            short_detail_xpath: "uuid/text()",
            long_detail: LongFormatter::Xpaths(vec!["uuid", "service_type", "instance_id"]),
        },
        primary_field: "uuid",
    }
}

pub fn desc_vrf() -> DescCollection {
    DescCollection {
        page_args: vec!["vrouter-fqdn"],
        page_builder: |req| remote(req, "db.vrf.0".to_string()),
        base_xpath: "__VrfListResp_list/VrfListResp/vrf_list/list",
        desc_elt: DescElement {
            short_detail_xpath: "name/text()",
            long_detail: LongFormatter::Xpaths(vec!["name", "uc_index"]),
        },
        primary_field: "name",
    }
}

pub fn desc_peering() -> DescCollection {
    DescCollection {
        page_args: vec!["vrouter-fqdn"],
        page_builder: |req| webui(req, "Snh_AgentXmppConnectionStatusReq"),
        base_xpath: "AgentXmppConnectionStatus/peer/list",
        desc_elt: DescElement {
            short_detail_xpath: "controller_ip/text()",
            long_detail: LongFormatter::Xpaths(vec![
                "controller_ip",
                "state",
                "flap_count",
                "cfg_controller",
            ]),
        },
        primary_field: "controller_ip",
    }
}

pub fn desc_vn() -> DescCollection {
    DescCollection {
        page_args: vec!["vrouter-fqdn"],
        page_builder: |req| remote(req, "db.vn.0".to_string()),
        base_xpath: "__VnListResp_list/VnListResp/vn_list/list",
        desc_elt: DescElement {
            short_detail_xpath: "name/text()",
            long_detail: LongFormatter::Xpaths(vec!["name", "vrf_name"]),
        },
        primary_field: "name",
    }
}

pub fn desc_mpls() -> DescCollection {
    DescCollection {
        page_args: vec!["vrouter-fqdn"],
        page_builder: |req| remote(req, "db.mpls.0".to_string()),
        base_xpath: "__MplsResp_list/MplsResp/mpls_list/list",
        desc_elt: DescElement {
            short_detail_xpath: "label/text()",
            long_detail: LongFormatter::Fn(mpls_detail),
        },
        primary_field: "label",
    }
}

fn route_detail(t: &mut DetailTable, e: &Element<'_>) -> IntrospectResult<()> {
    t.add_row([format!("Src {}", e.field("src_ip")?)]);

    t.add_row(["    Dst", "Peers", "MPLS label", "Interface", "Dest VN"]);
    for path in e.select("path_list/list/PathSandeshData")? {
        let nhs = select_strings(path, "nh/NhSandeshData//dip/text()")?;
        let peers = select_strings(path, "peer/text()")?;
        let label = select_strings(path, "label/text()")?;
        let itf = select_strings(path, "nh/NhSandeshData/itf/text()")?;
        let dest_vn = select_strings(path, "dest_vn/text()")?;
        t.add_row([
            format!("    {}", pretty(&nhs)),
            pretty(&peers),
            pretty(&label),
            pretty(&itf),
            pretty(&dest_vn),
        ]);
    }
    t.add_row([""]);
    Ok(())
}

fn mpls_detail(t: &mut DetailTable, e: &Element<'_>) -> IntrospectResult<()> {
    t.add_row([format!("Label: {}", e.field("label")?)]);
    nexthop_detail(t, e.node())?;
    t.add_row([""]);
    Ok(())
}

fn nexthop_detail(t: &mut DetailTable, node: Node<'_>) -> IntrospectResult<()> {
    t.add_row(["    Type", "Interface", "Nexthop index"]);
    let types = select_strings(node, "nh/NhSandeshData/type/text()")?;
    let itf = select_strings(node, "nh/NhSandeshData/itf/text()")?;
    let index = select_strings(node, "nh/NhSandeshData/nh_index/text()")?;
    t.add_row([format!("    {}", pretty(&types)), pretty(&itf), pretty(&index)]);
    Ok(())
}

/// Source of the route table scanned by `agent-multiple`
pub fn multiple_source(request: &PageRequest<'_>) -> Box<dyn Sourcer> {
    remote(request, route_table(request.arg(1)))
}

/// Source IPs of the routes having a multicast nexthop list
pub fn multiple_nexthop_routes(page: &Page) -> IntrospectResult<Vec<String>> {
    select_strings(page.document().root().into(), MULTIPLE_NEXTHOP_XPATH)
}
