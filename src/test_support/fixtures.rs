//! Test fixtures for common test scenarios.

use crate::core::{LinkTemplate, LinkTemplateTable, PackageLinks, PackageMap, RenameTable, VersionSet};
use crate::resolver::ResolverConfig;

/// SDK-style plugin manifest targeting net6.0 with a Jellyfin.Controller reference.
pub const PLUGIN_CSPROJ: &str = r#"<Project Sdk="Microsoft.NET.Sdk">

  <PropertyGroup>
    <TargetFramework>net6.0</TargetFramework>
    <AssemblyVersion>0.0.0.0</AssemblyVersion>
    <FileVersion>0.0.0.0</FileVersion>
    <GenerateDocumentationFile>true</GenerateDocumentationFile>
    <TreatWarningsAsErrors>true</TreatWarningsAsErrors>
    <Nullable>enable</Nullable>
  </PropertyGroup>

  <ItemGroup>
    <PackageReference Include="Jellyfin.Controller" Version="10.8.13" />
    <PackageReference Include="Jellyfin.Model" Version="10.8.13" />
    <PackageReference Include="StyleCop.Analyzers" Version="1.2.0-beta.507" PrivateAssets="All" />
    <PackageReference Include="YoutubeExplode" Version="6.3.13" />
  </ItemGroup>

  <ItemGroup>
    <None Remove="Configuration\configPage.html" />
    <EmbeddedResource Include="Configuration\configPage.html" />
  </ItemGroup>

</Project>
"#;

/// Legacy (non-SDK) manifest carrying the MSBuild XML namespace.
pub const LEGACY_CSPROJ: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <Configuration Condition=" '$(Configuration)' == '' ">Debug</Configuration>
    <OutputType>Library</OutputType>
    <TargetFrameworkVersion>v4.7.2</TargetFrameworkVersion>
  </PropertyGroup>
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json">
      <Version>13.0.3</Version>
    </PackageReference>
  </ItemGroup>
</Project>
"#;

/// Versions declared by [`PLUGIN_CSPROJ`].
pub fn versions() -> VersionSet {
    VersionSet::new(Some("6.0".to_string()), Some("10.8.13".to_string()))
}

/// A small resolver configuration mirroring the built-in tables.
pub fn resolver_config() -> ResolverConfig {
    let template = |s: &str| LinkTemplate::parse(s).expect("fixture template must parse");

    let packages = PackageMap::new()
        .with_types("System", "", ["Guid", "IProgress"])
        .with_types("System", "Threading", ["CancellationToken", "Timer"])
        .with_types("System", "Threading.Tasks", ["Task"])
        .with_types(
            "Jellyfin.Controller.MediaBrowser.Common.Plugins",
            "",
            ["BasePlugin", "IPlugin"],
        );

    let links = LinkTemplateTable::new()
        .with_links(
            "System",
            PackageLinks::new(vec![template(
                "https://learn.microsoft.com/en-us/dotnet/api/system.%s?view=net-{runtime_version}",
            )])
            .qualified(),
        )
        .with_links(
            "Jellyfin.Controller.MediaBrowser.Common.Plugins",
            PackageLinks::new(vec![template(
                "https://github.com/jellyfin/jellyfin/blob/v{dependency_version}/MediaBrowser.Common/Plugins/%s.cs",
            )]),
        );

    let renames = RenameTable::new().with_rename("IProgress", "IProgress-1");

    ResolverConfig::new(packages, links, renames)
}
