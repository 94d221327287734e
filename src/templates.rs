pub const PACKAGE_MD: &str = include_str!("../prompts/package.md");
pub const TITLE_MD: &str = include_str!("../prompts/title.md");
pub const DESCRIPTION_MD: &str = include_str!("../prompts/description.md");
pub const VERSION_MD: &str = include_str!("../prompts/version.md");
pub const ORGANISM_MD: &str = include_str!("../prompts/organism.md");
pub const COMMON_NAME_MD: &str = include_str!("../prompts/common_name.md");
pub const GENOME_MD: &str = include_str!("../prompts/genome.md");
pub const PROVIDER_MD: &str = include_str!("../prompts/provider.md");
pub const RELEASE_DATE_MD: &str = include_str!("../prompts/release_date.md");
pub const SOURCE_URL_MD: &str = include_str!("../prompts/source_url.md");
pub const ORGANISM_BIOCVIEW_MD: &str = include_str!("../prompts/organism_biocview.md");
pub const BSGENOME_OBJNAME_MD: &str = include_str!("../prompts/bsgenome_objname.md");
pub const CIRC_SEQS_MD: &str = include_str!("../prompts/circ_seqs.md");
pub const SEQS_SRCDIR_MD: &str = include_str!("../prompts/seqs_srcdir.md");
pub const SEQFILE_NAME_MD: &str = include_str!("../prompts/seqfile_name.md");
