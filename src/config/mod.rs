pub mod catalog;

use crate::domain::model::RenderTarget;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const GFWLIST_URL: &str =
    "https://raw.githubusercontent.com/gfwlist/gfwlist/master/gfwlist.txt";
pub const BLACKMATRIX7_BASE: &str =
    "https://raw.githubusercontent.com/blackmatrix7/ios_rule_script/master/rule";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rulegen")]
#[command(about = "Generate proxy routing rules for Shadowrocket and GL.iNet routers")]
pub struct CliConfig {
    #[arg(long, help = "Generate Shadowrocket GFW config only")]
    pub shadowrocket_gfw: bool,

    #[arg(long, help = "Generate Shadowrocket China config only")]
    pub shadowrocket_china: bool,

    #[arg(long, help = "Generate GL.iNet policy only")]
    pub glinet: bool,

    #[arg(long, default_value = GFWLIST_URL)]
    pub gfwlist_url: String,

    #[arg(long, default_value = BLACKMATRIX7_BASE)]
    pub rule_base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "./cache")]
    pub cache_path: String,

    #[arg(long, default_value = "./data")]
    pub data_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn gfwlist_url(&self) -> &str {
        &self.gfwlist_url
    }

    fn rule_base_url(&self) -> &str {
        &self.rule_base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    // 沒指定任何輸出旗標時全部都產
    fn targets(&self) -> Vec<RenderTarget> {
        let mut targets = Vec::new();
        if self.shadowrocket_gfw {
            targets.push(RenderTarget::ShadowrocketGfw);
        }
        if self.shadowrocket_china {
            targets.push(RenderTarget::ShadowrocketChina);
        }
        if self.glinet {
            targets.push(RenderTarget::GlinetPolicy);
        }
        if targets.is_empty() {
            RenderTarget::ALL.to_vec()
        } else {
            targets
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("gfwlist_url", &self.gfwlist_url)?;
        validate_url("rule_base_url", &self.rule_base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("cache_path", &self.cache_path)?;
        validate_path("data_path", &self.data_path)?;
        Ok(())
    }
}
