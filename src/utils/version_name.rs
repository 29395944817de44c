//! 操作系统版本代号工具
//! Windows NT 版本号、macOS / Android 版本号到发行代号的映射，未知版本返回 None

/// 版本代号工具类
pub struct VersionNames;

impl VersionNames {
    /// Windows 版本代号（输入为 UA 中的 `NT 6.1` 形式）
    pub fn windows(version: &str) -> Option<&'static str> {
        match version {
            "NT" => Some("NT"),
            "XP" => Some("XP"),
            "NT 5.0" => Some("2000"),
            "NT 5.1" => Some("XP"),
            "NT 5.2" => Some("2003"),
            "NT 6.0" => Some("Vista"),
            "NT 6.1" => Some("7"),
            "NT 6.2" => Some("8"),
            "NT 6.3" => Some("8.1"),
            "NT 10.0" => Some("10"),
            _ => None,
        }
    }

    /// macOS 版本代号（`10.14.5` → Mojave，`11` → Big Sur）
    pub fn macos(version: &str) -> Option<&'static str> {
        let (major, minor) = Self::major_minor(version);
        if major == 10 {
            return match minor {
                5 => Some("Leopard"),
                6 => Some("Snow Leopard"),
                7 => Some("Lion"),
                8 => Some("Mountain Lion"),
                9 => Some("Mavericks"),
                10 => Some("Yosemite"),
                11 => Some("El Capitan"),
                12 => Some("Sierra"),
                13 => Some("High Sierra"),
                14 => Some("Mojave"),
                15 => Some("Catalina"),
                _ => None,
            };
        }

        match major {
            11 => Some("Big Sur"),
            12 => Some("Monterey"),
            13 => Some("Ventura"),
            14 => Some("Sonoma"),
            15 => Some("Sequoia"),
            _ => None,
        }
    }

    /// Android 版本代号（`8.0` → Oreo，`9` → Pie）
    pub fn android(version: &str) -> Option<&'static str> {
        match Self::major_minor(version) {
            (1, minor) if minor < 5 => None,
            (1, 5) => Some("Cupcake"),
            (1, _) => Some("Donut"),
            (2, minor) if minor < 2 => Some("Eclair"),
            (2, 2) => Some("Froyo"),
            (2, _) => Some("Gingerbread"),
            (3, _) => Some("Honeycomb"),
            (4, 0) => Some("Ice Cream Sandwich"),
            (4, minor) if minor < 4 => Some("Jelly Bean"),
            (4, _) => Some("KitKat"),
            (5, _) => Some("Lollipop"),
            (6, _) => Some("Marshmallow"),
            (7, _) => Some("Nougat"),
            (8, _) => Some("Oreo"),
            (9, _) => Some("Pie"),
            _ => None,
        }
    }

    // 取前两段，无法解析的段记为 0
    fn major_minor(version: &str) -> (u32, u32) {
        let mut parts = version
            .split('.')
            .map(|part| part.trim().parse::<u32>().unwrap_or(0));
        let major = parts.next().unwrap_or(0);
        let minor = parts.next().unwrap_or(0);
        (major, minor)
    }
}
