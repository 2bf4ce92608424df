mod route_dto;

pub use route_dto::RouteResponseDto;
