use std::io;

use log::debug;

use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責從配置來源取得配置並記錄摘要
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        let config = self.config_port.get_config()?;
        debug!(
            "配置：目錄 {}，上限 {} 位元組，跳過目錄 {:?}，額外排除 {:?}",
            config.directory.display(),
            config.budget_bytes,
            config.skip_dirs,
            config.extra_excludes
        );
        Ok(config)
    }
}
