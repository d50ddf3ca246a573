//! Header names of the source workbook and the technology dimensions they carry.

use serde::Serialize;

pub const SECURITY_CODE: &str = "证券代码";
pub const SHORT_NAME: &str = "股票简称";
pub const YEAR: &str = "年份";
pub const INDUSTRY: &str = "行业名称";
pub const PROVINCE: &str = "省份";
pub const ARTIFICIAL_INTELLIGENCE: &str = "人工智能技术";
pub const BIG_DATA: &str = "大数据技术";
pub const CLOUD_COMPUTING: &str = "云计算技术";
pub const BLOCKCHAIN: &str = "区块链技术";
pub const TRANSFORMATION_INTENSITY: &str = "数字化转型";

/// Every header the loader insists on, in the order missing ones are reported.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    SECURITY_CODE,
    SHORT_NAME,
    YEAR,
    INDUSTRY,
    PROVINCE,
    ARTIFICIAL_INTELLIGENCE,
    BIG_DATA,
    CLOUD_COMPUTING,
    BLOCKCHAIN,
    TRANSFORMATION_INTENSITY,
];

/// One of the four technology-adoption measures tracked per company-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TechDimension {
    ArtificialIntelligence,
    BigData,
    CloudComputing,
    Blockchain,
}

impl TechDimension {
    /// Display and radar-axis order.
    pub const ALL: [TechDimension; 4] = [
        TechDimension::ArtificialIntelligence,
        TechDimension::BigData,
        TechDimension::CloudComputing,
        TechDimension::Blockchain,
    ];

    pub fn column(self) -> &'static str {
        match self {
            TechDimension::ArtificialIntelligence => ARTIFICIAL_INTELLIGENCE,
            TechDimension::BigData => BIG_DATA,
            TechDimension::CloudComputing => CLOUD_COMPUTING,
            TechDimension::Blockchain => BLOCKCHAIN,
        }
    }
}
