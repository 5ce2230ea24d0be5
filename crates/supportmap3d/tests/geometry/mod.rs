mod aabb_scale;
mod cone_support;
mod convex_shape_dispatch;
mod inertia;
mod local_scaling;
