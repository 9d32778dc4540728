mod filter_dto;

pub use filter_dto::{
    BreadcrumbItemDto, FilterPageDto, FilterQuery, HeroLevelDto, HiddenParamDto, OptionDto,
};
