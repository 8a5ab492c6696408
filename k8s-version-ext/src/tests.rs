use super::*;

#[test]
fn info_with_git_version() {
    let info = version::Info::with_git_version("v1.30.2-aliyun.1");
    assert_eq!(info.git_version, "v1.30.2-aliyun.1");
    assert_eq!(info.major, "1");
    assert_eq!(info.minor, "30");
    assert_eq!(info.generic_version(), Ok(GenericVersion::new(1, 30, 2)));
}

#[test]
fn info_with_unparsable_git_version() {
    let info = version::Info::with_git_version("devel");
    assert!(info.major.is_empty());
    assert!(info.minor.is_empty());
    assert!(info.generic_version().is_err());
}
