//! Hand-curated names for files whose generic translation reads poorly.

pub(super) struct BuiltinScope {
    pub(super) scope: &'static [&'static str],
    pub(super) files: &'static [(&'static str, &'static str)],
}

pub(super) const BUILTIN_SCOPES: &[BuiltinScope] = &[
    BuiltinScope {
        scope: &["00.基础文档", "软件相关", "开箱上手指南"],
        files: &[
            ("EVB配置网络.pdf", "EVB Network Configuration.pdf"),
            (
                "Linux 编译 sample环境搭建指引v1.1.pdf",
                "Linux Compilation Sample Environment Setup Guide v1.1.pdf",
            ),
            (
                "SA62105X2 Bring-Up应用指南v0.3.pdf",
                "SA62105X2 Bring-Up Application Guide v0.3.pdf",
            ),
            (
                "SA62系列AI算法部署指南v1.0.pdf",
                "SA62 Series AI Algorithm Deployment Guide v1.0.pdf",
            ),
            (
                "SA62系列_NorFlash固件烧录指南v1.5.pdf",
                "SA62 Series NorFlash Firmware Burning Guide v1.5.pdf",
            ),
            (
                "SA62系列_V13功耗板_AI_Robot使用指南v0.5.pdf",
                "SA62 Series V13 Power Consumption Board AI Robot User Guide v0.5.pdf",
            ),
            (
                "SA62系列  回板验证操作指南v0.2.pdf",
                "SA62 Series Board Verification Operation Guide v0.2.pdf",
            ),
            (
                "！SA62系列 开箱上手指南v1.9.pdf",
                "SA62 Series Unboxing and Getting Started Guide v1.9.pdf",
            ),
            (
                "Ubuntu 22.04 开发环境配置说明文档.pdf",
                "Ubuntu 22.04 Development Environment Configuration Instructions.pdf",
            ),
            (
                "使能usb host的网络功能.pdf",
                "Enabling the USB Host Network Function.pdf",
            ),
        ],
    },
    BuiltinScope {
        scope: &["00.基础文档", "软件相关", "SDK"],
        files: &[
            (
                "SA62系列 3A 软件开发参考v0.93.pdf",
                "SA62 Series 3A Software Development Reference v0.93.pdf",
            ),
            (
                "SA62系列 AUDIO HAPI 软件开发参考_V0.9.pdf",
                "SA62 Series AUDIO HAPI Software Development Reference v0.9.pdf",
            ),
            (
                "SA62系列 AUDIO 软件开发参考v2.5.3.pdf",
                "SA62 Series AUDIO Software Development Reference v2.5.3.pdf",
            ),
            (
                "SA62系列 CRYPTO 密码算法库软件开发参考_V0.56.pdf",
                "SA62 Series CRYPTO Cryptographic Algorithm Library Software Development Reference v0.56.pdf",
            ),
            (
                "SA62系列 FILTER 媒体处理软件开发参考_V0.6.pdf",
                "SA62 Series Filter Media Processing Software Development Reference v0.6.pdf",
            ),
            (
                "SA62系列 ISP 软件开发参考v0.82.pdf",
                "SA62 Series ISP Software Development Reference v0.82.pdf",
            ),
            (
                "SA62系列 MAPI整体函数列表.XLSX",
                "SA62 Series MAPI Function List.XLSX",
            ),
            (
                "SA62系列 MEDIA HAPI 软件开发参考_V0.14.pdf",
                "SA62 Series MEDIA HAPI Software Development Reference v0.14.pdf",
            ),
            (
                "SA62系列 MIPI使用指南_V0.6.pdf",
                "SA62 Series MIPI User Guide v0.6.pdf",
            ),
            (
                "SA62系列 REGION 软件开发参考_V0.5.16.pdf",
                "SA62 Series REGION Software Development Reference v0.5.16.pdf",
            ),
            (
                "SA62系列 SDK 整体说明v0.6.pdf",
                "SA62 Series SDK Overview v0.6.pdf",
            ),
            (
                "SA62系列 Sensor添加与调试指南v0.81.pdf",
                "SA62 Series Sensor Adding and Debugging Guide v0.81.pdf",
            ),
            (
                "SA62系列 Sensor调试注意事项.pdf",
                "SA62 Series Sensor Debugging Precautions.pdf",
            ),
            (
                "SA62系列 SENSOR 软件开发参考_V0.55.pdf",
                "SA62 Series Sensor Software Development Reference V0.55.pdf",
            ),
            (
                "SA62系列 SVP 软件开发参考_V0.5.9.pdf",
                "SA62 Series SVP Software Development Reference V0.5.9.pdf",
            ),
            (
                "SA62系列 SYS HAPI 软件开发参考_V0.5.pdf",
                "SA62 Series SYS HAPI Software Development Reference V0.5.pdf",
            ),
            (
                "SA62系列 SYS_软件开发参考_V0.5.19.pdf",
                "SA62 Series SYS Software Development Reference V0.5.19.pdf",
            ),
            (
                "SA62系列_VIDEO_HAPI_软件开发参考_V3.0.pdf",
                "SA62 Series VIDEO HAPI Software Development Reference V3.0.pdf",
            ),
            (
                "SA62系列 VIN 软件开发参考_V0.63.pdf",
                "SA62 Series VIN Software Development Reference V0.63.pdf",
            ),
            (
                "SA62系列 VPSS 软件开发参考_V0.62.pdf",
                "SA62 Series VPSS Software Development Reference V0.62.pdf",
            ),
            (
                "SA62系列 VPU 编码软件开发参考_V0.8.1.pdf",
                "SA62 Series VPU Encoding Software Development Reference V0.8.1.pdf",
            ),
            (
                "SA62系列 VPU 解码软件开发参考0.5.3.pdf",
                "SA62 Series VPU Decoding Software Development Reference V0.5.3.pdf",
            ),
            (
                "SA62系列 低功耗模式开发指南_v1.0.0.pdf",
                "SA62 Series Low Power Mode Development Guide v1.0.0.pdf",
            ),
            (
                "SA62系列_双Sensor_mipi_switch方案调试注意事项.pdf",
                "SA62 Series Dual Sensor MIPI Switch Solution Debugging Notes.pdf",
            ),
            (
                "SA62系列 快速启动优化指南_v1.8.0.pdf",
                "SA62 Series Quick Start Optimization Guide v1.8.0.pdf",
            ),
            (
                "SA62系列音频算法参数调试指南_V0.2.pdf",
                "SA62 Series Audio Algorithm Parameter Debugging Guide v0.2.pdf",
            ),
            (
                "SA62系列 音频设备树配置说明_v0.3.pdf",
                "SA62 Series Audio Device Tree Configuration Instructions v0.3.pdf",
            ),
        ],
    },
    BuiltinScope {
        scope: &["00.基础文档", "软件相关", "tools"],
        files: &[
            (
                "SA62系列 AWBTool工具使用指南.pdf",
                "SA62 Series AWBTool User Guide.pdf",
            ),
            (
                "SA62_系列BSP工具说明v0.2.pdf",
                "SA62 Series BSP Tool Description v0.2.pdf",
            ),
            (
                "SA62系列_BurnTool工具使用指南.pdf",
                "SA62 Series BurnTool User Guide.pdf",
            ),
            (
                "SA62系列 streamer_media 离线仿真功能说明v0.4.pdf",
                "SA62 Series Streamer Media Offline Simulation Function Description v0.4.pdf",
            ),
            (
                "SA62系列 UploadTool工具使用指南.pdf",
                "SA62 Series UploadTool User Guide.pdf",
            ),
            (
                "SA62系列图像质量调试工具使用指南.pdf",
                "SA62 Series Image Quality Debugging Tool User Guide.pdf",
            ),
            ("相机标定说明.pdf", "Camera Calibration Instructions.pdf"),
            (
                "研极微VNET虚拟网卡标准规范v0.3.pdf",
                "Yanji Micro VNET Virtual Network Card Standard Specification v0.3.pdf",
            ),
            (
                "量产测试工具使用指南.pdf",
                "Mass Production Test Tool User Guide.pdf",
            ),
            (
                "音频质量调试工具使用指南.pdf",
                "Audio Quality Debugging Tool User Guide.pdf",
            ),
        ],
    },
    BuiltinScope {
        scope: &["00.基础文档", "软件相关", "bsp"],
        files: &[
            (
                "SA62系列 固件烧录与升级使用指南.pdf",
                "SA62 Series Firmware Flashing and Upgrade User Guide.pdf",
            ),
            (
                "SA62系列 外围设备驱动开发指南_v1.0.pdf",
                "SA62 Series Peripheral Device Driver Development Guide v1.0.pdf",
            ),
            (
                "SA62系列 开发环境用户指南.pdf",
                "SA62 Series Development Environment User Guide.pdf",
            ),
            (
                "SA62系列 文件系统使用指南.pdf",
                "SA62 Series File System Usage Guide.pdf",
            ),
            (
                "SA62系列 镜像打包工具使用指南.pdf",
                "SA62 Series Image Packaging Tool User Guide.pdf",
            ),
        ],
    },
    BuiltinScope {
        scope: &["00.基础文档", "硬件相关", "子板"],
        files: &[
            (
                "EVB硬件参考设计_原理图_pcb.rar",
                "EVB Hardware Reference Design PCB Schematic.rar",
            ),
            ("6920E2 V24 DEMO.tar", "6920E2 V24 DEMO.tar"),
            ("SA62105E_电源树V1.1.pdf", "SA62105E Power Tree V1.1.pdf"),
            ("V17_PowerTree.pdf", "SA62105X Power Tree V17.pdf"),
        ],
    },
    BuiltinScope {
        scope: &["00.基础文档", "硬件相关", "芯片"],
        files: &[
            (
                "SA62105E_pin_List_ver1.0.8.03.xlsx",
                "SA62105E_Pin_List_ver1.0.8.03.xlsx",
            ),
            (
                "SA62105X_Pin定义_V1.2.xlsx",
                "SA62105X_Pin_Definition_V1.2.xlsx",
            ),
            (
                "SA62105X芯片简介v1.2.pdf",
                "SA62105X Chip Overview v1.2.pdf",
            ),
            (
                "SA62105系列_数据手册V0.32.pdf",
                "SA62105 Series_Datasheet V0.32.pdf",
            ),
            (
                "研极SA62105E硬件用户指南V0.61.pdf",
                "Yanji SA62105E Hardware User Guide V0.61.pdf",
            ),
            (
                "研极SA62105X硬件用户指南V0.87.pdf",
                "Yanji SA62105X Hardware User Guide V0.87.pdf",
            ),
            (
                "研极SA62105芯片适配指南V0.44.pdf",
                "Yanji SA62105 Chip Adaptation Guide V0.44.pdf",
            ),
        ],
    },
];
