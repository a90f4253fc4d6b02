use crate::domain::model::{DomainSet, RenderTarget};
use std::fmt::Write;

// [General] 區段的固定樣板，與網域集合無關
const SKIP_PROXY: &str = "192.168.0.0/16, 10.0.0.0/8, 172.16.0.0/12, localhost, *.local";
const BYPASS_TUN: &str = "10.0.0.0/8, 100.64.0.0/10, 127.0.0.0/8, 169.254.0.0/16, \
                          172.16.0.0/12, 192.0.0.0/24, 192.0.2.0/24, 192.88.99.0/24, \
                          192.168.0.0/16, 198.18.0.0/15, 198.51.100.0/24, 203.0.113.0/24, \
                          224.0.0.0/4, 255.255.255.255/32";

/// 兩個 Shadowrocket 變體只差在註解與 DNS 預設值
struct ShadowrocketProfile {
    header: &'static [&'static str],
    dns_server: &'static str,
    rule_comment: &'static str,
    fallback_comment: &'static str,
}

const GFW_PROFILE: ShadowrocketProfile = ShadowrocketProfile {
    header: &[
        "# Shadowrocket Configuration",
        "# Route GFW-blocked traffic to US home",
        "# Usage: Import this file in Shadowrocket when in China",
    ],
    dns_server: "system, 8.8.8.8, 8.8.4.4",
    rule_comment: "# GFW-blocked domains - route to US proxy",
    fallback_comment: "# Default: Direct connection",
};

const CHINA_PROFILE: ShadowrocketProfile = ShadowrocketProfile {
    header: &[
        "# Shadowrocket Configuration",
        "# Route Chinese media apps to China home",
        "# Usage: Import this file in Shadowrocket when in US",
        "# Note: Configure proxy to point to your China WireGuard server",
    ],
    dns_server: "system",
    rule_comment: "# Chinese media apps - route to China proxy",
    fallback_comment: "# Default: Direct connection (for data/content delivery)",
};

const GLINET_HEADER: &[&str] = &[
    "# GL.iNet VPN Policy",
    "# Route GFW-blocked traffic to US home",
    "# Upload this file to GL.iNet router: VPN > VPN Policy",
];

/// 把排序後的網域集合渲染成指定格式的設定檔全文。
/// 空集合照樣輸出完整樣板與 `FINAL,DIRECT` 兜底，不會產生殘缺檔案。
pub fn render(domains: &DomainSet, target: RenderTarget) -> String {
    match target {
        RenderTarget::ShadowrocketGfw => render_shadowrocket(domains, &GFW_PROFILE),
        RenderTarget::ShadowrocketChina => render_shadowrocket(domains, &CHINA_PROFILE),
        RenderTarget::GlinetPolicy => render_glinet(domains),
    }
}

fn render_shadowrocket(domains: &DomainSet, profile: &ShadowrocketProfile) -> String {
    let mut out = String::new();
    for line in profile.header {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("[General]\n");
    out.push_str("bypass-system = true\n");
    let _ = writeln!(out, "skip-proxy = {}", SKIP_PROXY);
    let _ = writeln!(out, "bypass-tun = {}", BYPASS_TUN);
    let _ = writeln!(out, "dns-server = {}", profile.dns_server);
    out.push('\n');

    out.push_str("[Rule]\n");
    out.push_str(profile.rule_comment);
    out.push('\n');
    for domain in domains.iter() {
        let _ = writeln!(out, "DOMAIN-SUFFIX,{},PROXY", domain);
    }
    out.push('\n');

    out.push_str(profile.fallback_comment);
    out.push('\n');
    out.push_str("FINAL,DIRECT\n");
    out
}

fn render_glinet(domains: &DomainSet) -> String {
    let mut out = String::new();
    for line in GLINET_HEADER {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    for domain in domains.iter() {
        out.push_str(domain.as_str());
        out.push('\n');
    }
    out
}
