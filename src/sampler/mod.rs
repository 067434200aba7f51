mod point_sampler;

pub use point_sampler::PointSampler;
